//! Form action tests through GradeBookHandler::dispatch
mod common;

use common::{apply, course_names, get_test_handler};
use course_gpa::{Action, Config, GpaResult, Grade, GradeBookHandler, Response};

#[test]
fn test_add_from_form_fields() {
    let mut handler = get_test_handler();
    apply(&mut handler, &["name  Calculus ", "grade b"]);
    assert!(handler.form().can_add());

    let response = handler.dispatch(Action::Add(None));
    assert_eq!(response, Response::Redraw);
    assert_eq!(course_names(&handler), vec!["Calculus"]);
    assert_eq!(
        handler.book().courses().iter().next().unwrap().grade(),
        Grade::B
    );
}

// After an add the name is cleared and the selector goes back to the default
#[test]
fn test_add_resets_form() {
    let config = Config {
        default_grade: Grade::C,
        color: false,
        ..Config::default()
    };
    let mut handler = GradeBookHandler::new(config);
    assert_eq!(handler.form().grade(), Grade::C);

    apply(&mut handler, &["grade F", "add Chemistry"]);
    assert_eq!(handler.form().name(), "");
    assert_eq!(handler.form().grade(), Grade::C);
    assert_eq!(
        handler.book().courses().iter().next().unwrap().grade(),
        Grade::F
    );
}

// Add is disabled for a blank name: nothing happens
#[test]
fn test_add_blank_is_ignored() {
    let mut handler = get_test_handler();
    assert_eq!(handler.dispatch(Action::Add(None)), Response::Ignored);
    apply(&mut handler, &["name    "]);
    assert_eq!(handler.dispatch(Action::Add(None)), Response::Ignored);
    assert!(handler.book().courses().is_empty());
}

// Calculate is disabled while the list is empty
#[test]
fn test_calculate_empty_is_ignored() {
    let mut handler = get_test_handler();
    assert_eq!(handler.dispatch(Action::Calculate), Response::Ignored);
    assert_eq!(*handler.book().result(), GpaResult::NotComputed);
}

#[test]
fn test_remove_unknown_id_clears_gpa() {
    let mut handler = get_test_handler();
    apply(&mut handler, &["add Calculus", "calc"]);
    assert!(handler.book().result().gpa().is_some());

    assert_eq!(
        handler.dispatch(Action::Remove("#99".parse().unwrap())),
        Response::Redraw
    );
    assert_eq!(course_names(&handler), vec!["Calculus"]);
    assert_eq!(*handler.book().result(), GpaResult::NotComputed);
}

#[test]
fn test_remove_by_displayed_id() {
    let mut handler = get_test_handler();
    apply(&mut handler, &["add One", "add Two", "add Three", "rm #2"]);
    assert_eq!(course_names(&handler), vec!["Three", "One"]);
}

#[test]
fn test_help_and_quit() {
    let mut handler = get_test_handler();
    match handler.dispatch(Action::Help) {
        Response::Message(text) => assert!(text.contains("remove <id>")),
        other => panic!("unexpected response: {:?}", other),
    }
    assert_eq!(handler.dispatch(Action::Quit), Response::Quit);
}
