//! Parsing of form actions typed at the prompt
//!
//! Each input line is one action. The first word picks the action and the
//! rest of the line is its argument.

use crate::gradebook::{CourseId, Grade};
use std::str::FromStr;

/// A user action on the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the contents of the name field
    SetName(String),
    /// Pick a grade in the selector
    SelectGrade(Grade),
    /// Submit the form, optionally typing a name into it first
    Add(Option<String>),
    Remove(CourseId),
    Calculate,
    Show,
    Help,
    Quit,
    /// Blank line
    Nothing,
}

/// Errors for input lines that do not describe a valid action
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    Unknown(String),
    #[error("Command '{command}' needs an argument: {usage}")]
    MissingArgument {
        command: &'static str,
        usage: &'static str,
    },
    /// Grade label not on the scale; the message lists valid labels.
    #[error("{0}")]
    InvalidGrade(String),
    #[error("{0}")]
    InvalidId(String),
}

/// Usage text printed by the `help` action
pub const HELP: &str = "\
Commands:
  name <text>      type a course name into the form
  grade <label>    select a grade (A, B+, B, C+, C, D+, D, F, W)
  add [<text>]     add the course in the form (text sets the name first)
  remove <id>      remove a course, e.g. 'remove #2' (alias: rm)
  calc             calculate the GPA (aliases: calculate, gpa)
  show             redraw the form (alias: list)
  help             show this help
  quit             leave (alias: exit)";

fn required<'a>(
    arg: &'a str,
    command: &'static str,
    usage: &'static str,
) -> Result<&'a str, CommandError> {
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, usage })
    } else {
        Ok(arg)
    }
}

impl FromStr for Action {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Action::Nothing);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "name" => Ok(Action::SetName(rest.to_string())),
            "grade" => {
                let label = required(rest, "grade", "grade <label>")?;
                label
                    .parse::<Grade>()
                    .map(Action::SelectGrade)
                    .map_err(CommandError::InvalidGrade)
            }
            "add" => Ok(Action::Add((!rest.is_empty()).then(|| rest.to_string()))),
            "remove" | "rm" => {
                let id = required(rest, "remove", "remove <id>")?;
                id.parse::<CourseId>()
                    .map(Action::Remove)
                    .map_err(CommandError::InvalidId)
            }
            "calc" | "calculate" | "gpa" => Ok(Action::Calculate),
            "show" | "list" => Ok(Action::Show),
            "help" | "?" => Ok(Action::Help),
            "quit" | "exit" => Ok(Action::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}
