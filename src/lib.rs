//! Course GPA Library
//!
//! This library provides an interactive terminal form for recording
//! courses with letter grades and calculating a grade-point average.
//! Withdrawn courses (`W`) are listed but left out of the average.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **View Layer**: `GradeBookHandler`, `handlers` and `session` - parse
//!   typed actions, run them and redraw the form
//! - **Domain Layer**: `gradebook` module - grade scale, course list and
//!   GPA calculation
//! - **Config Layer**: `config` module - optional TOML preferences
//!
//! # Example
//!
//! ```no_run
//! use course_gpa::{Config, GradeBookHandler, Session};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let handler = GradeBookHandler::new(Config::default());
//!     let stdin = std::io::stdin();
//!     Session::new(handler, stdin.lock(), std::io::stdout()).run()
//! }
//! ```

pub mod command;
pub mod config;
pub mod form;
pub mod formatting;
pub mod gradebook;
pub mod handlers;
pub mod session;

// Re-export commonly used types
pub use command::{Action, CommandError};
pub use config::{Config, ConfigError, Labels};
pub use form::Form;
pub use gradebook::{Course, CourseId, CourseList, Gpa, GpaResult, Grade, GradeBook};
pub use handlers::Response;
pub use session::Session;

/// State behind the form: the gradebook, the form input and preferences
///
/// The handler owns everything it mutates; actions are applied one at a
/// time through [`GradeBookHandler::dispatch`].
pub struct GradeBookHandler {
    pub(crate) book: GradeBook,
    pub(crate) form: Form,
    pub(crate) config: Config,
}

impl GradeBookHandler {
    /// Create a handler with an empty gradebook
    ///
    /// # Arguments
    /// * `config` - Preferences; `default_grade` seeds the grade selector
    pub fn new(config: Config) -> Self {
        Self {
            book: GradeBook::new(),
            form: Form::new(config.default_grade),
            config,
        }
    }

    pub fn book(&self) -> &GradeBook {
        &self.book
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render the current view
    pub fn render(&self) -> String {
        formatting::render(&self.book, &self.form, &self.config)
    }
}

impl Default for GradeBookHandler {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
