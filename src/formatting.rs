//! Rendering of the gradebook form
//!
//! The whole view is rebuilt as one string after each action.

use crate::config::Config;
use crate::form::Form;
use crate::gradebook::{Course, GpaResult, Grade, GradeBook};
use colored::Colorize;

fn control(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[{}]", label)
    } else {
        format!("[{}: disabled]", label)
    }
}

/// Format the grade selector, marking the selected label with `*`
pub fn format_selector(selected: Grade) -> String {
    Grade::ALL
        .iter()
        .map(|g| {
            if *g == selected {
                format!("*{}", g)
            } else {
                g.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format one course line
///
/// Failing grades are shown in red when colours are on, or followed by a
/// `!` marker otherwise.
pub fn format_course(course: &Course, config: &Config) -> String {
    let grade = course.grade();
    let grade_text = if config.highlight_failing && grade.is_failing() {
        if config.color {
            grade.label().red().bold().to_string()
        } else {
            format!("{} !", grade)
        }
    } else {
        grade.to_string()
    };

    format!("  {} {} (grade: {})", course.id(), course.name(), grade_text)
}

/// Format the GPA line, or `None` when nothing has been calculated
pub fn format_result(result: &GpaResult, config: &Config) -> Option<String> {
    let gpa = result.gpa()?;
    let value = if config.color {
        gpa.to_string().bold().to_string()
    } else {
        gpa.to_string()
    };

    let mut line = format!("GPA: {}", value);
    if result.excludes_withdrawals() {
        line.push(' ');
        line.push_str(&config.labels.withdrawn_note);
    }
    Some(line)
}

/// Render the full view: form, course list and calculated GPA
///
/// # Arguments
/// * `book` - Courses and the last calculated GPA
/// * `form` - Current form input
/// * `config` - Labels and display preferences
pub fn render(book: &GradeBook, form: &Form, config: &Config) -> String {
    let title = if config.color {
        config.labels.title.bold().to_string()
    } else {
        config.labels.title.clone()
    };

    let mut result = format!("== {} ==\n", title);
    result.push_str(&format!(
        "Name: [{}]  Grade: {}  {}\n",
        form.name(),
        format_selector(form.grade()),
        control("add", form.can_add())
    ));
    result.push_str("--\n");

    let courses = book.courses();
    if courses.is_empty() {
        result.push_str(&format!("  {}\n", config.labels.empty));
    }
    for course in courses.iter() {
        result.push_str(&format_course(course, config));
        result.push('\n');
    }

    result.push_str("--\n");
    result.push_str(&control("calc", book.can_calculate()));
    if let Some(line) = format_result(book.result(), config) {
        result.push_str("  ");
        result.push_str(&line);
    }
    result.push('\n');

    result
}
