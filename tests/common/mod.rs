//! Common test utilities for integration tests
#![allow(dead_code)]

use course_gpa::{Action, Config, GradeBookHandler, Session};
use std::io::Cursor;

/// Config with colours off so rendered output is plain text
pub fn plain_config() -> Config {
    Config {
        color: false,
        ..Config::default()
    }
}

/// Create a handler with plain output and an empty gradebook
pub fn get_test_handler() -> GradeBookHandler {
    GradeBookHandler::new(plain_config())
}

/// Parse and dispatch each line, panicking on parse errors
pub fn apply(handler: &mut GradeBookHandler, lines: &[&str]) {
    for line in lines {
        let action: Action = line.parse().unwrap();
        handler.dispatch(action);
    }
}

/// Run a full session over the given input and return everything written
pub fn run_script(script: &str) -> String {
    let mut session = Session::new(get_test_handler(), Cursor::new(script.to_string()), Vec::new());
    session.run().unwrap();
    String::from_utf8(session.into_output()).unwrap()
}

/// Names in list order
pub fn course_names(handler: &GradeBookHandler) -> Vec<String> {
    handler
        .book()
        .courses()
        .iter()
        .map(|c| c.name().to_string())
        .collect()
}
