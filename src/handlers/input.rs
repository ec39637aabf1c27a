//! Form input handlers (name field and grade selector)

use super::Response;
use crate::GradeBookHandler;
use crate::gradebook::Grade;

impl GradeBookHandler {
    /// Replace the text in the name field. Nothing is trimmed until the
    /// course is added.
    pub fn handle_set_name(&mut self, name: String) -> Response {
        self.form.set_name(name);
        Response::Redraw
    }

    pub fn handle_select_grade(&mut self, grade: Grade) -> Response {
        self.form.select_grade(grade);
        Response::Redraw
    }
}
