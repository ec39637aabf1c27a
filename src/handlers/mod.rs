//! Action handlers for the gradebook form
//!
//! This module contains the implementation of every form action.
//! Each handler is in a separate file; `dispatch` routes a parsed
//! [`Action`] to the right one.

pub mod add;
pub mod calculate;
pub mod input;
pub mod remove;

use crate::GradeBookHandler;
use crate::command::{Action, HELP};

/// What the session should do after an action ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// State may have changed; draw the view again
    Redraw,
    /// Print a message without redrawing
    Message(String),
    /// Action was disabled or empty; print nothing
    Ignored,
    Quit,
}

impl GradeBookHandler {
    /// Run one action to completion
    pub fn dispatch(&mut self, action: Action) -> Response {
        match action {
            Action::SetName(name) => self.handle_set_name(name),
            Action::SelectGrade(grade) => self.handle_select_grade(grade),
            Action::Add(name) => self.handle_add(name),
            Action::Remove(id) => self.handle_remove(id),
            Action::Calculate => self.handle_calculate(),
            Action::Show => Response::Redraw,
            Action::Help => Response::Message(HELP.to_string()),
            Action::Quit => Response::Quit,
            Action::Nothing => Response::Ignored,
        }
    }
}
