//! Remove handler for the gradebook form

use super::Response;
use crate::GradeBookHandler;
use crate::gradebook::CourseId;

impl GradeBookHandler {
    /// Remove a course by id. An unknown id leaves the list as it is but
    /// still clears the calculated GPA.
    pub fn handle_remove(&mut self, id: CourseId) -> Response {
        self.book.remove(id);
        Response::Redraw
    }
}
