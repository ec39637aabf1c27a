//! Add handler for the gradebook form

use super::Response;
use crate::GradeBookHandler;
use tracing::debug;

impl GradeBookHandler {
    /// Submit the form as a new course.
    ///
    /// A name passed along with the action is typed into the form first,
    /// like entering text and pressing Enter. With a blank name the add
    /// action is disabled and this does nothing. After a successful add the
    /// form is cleared and the selector returns to the default grade.
    pub fn handle_add(&mut self, name: Option<String>) -> Response {
        if let Some(name) = name {
            self.form.set_name(name);
        }

        if !self.form.can_add() {
            debug!("add ignored: course name is blank");
            return Response::Ignored;
        }

        // can_add guarantees a non-blank name, so the list accepts it
        if self.book.add(self.form.name(), self.form.grade()).is_some() {
            self.form.reset();
        }
        Response::Redraw
    }
}
