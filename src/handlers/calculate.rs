//! Calculate handler for the gradebook form

use super::Response;
use crate::GradeBookHandler;
use tracing::debug;

impl GradeBookHandler {
    /// Calculate the GPA for the current list. Disabled (and ignored) while
    /// the list is empty.
    pub fn handle_calculate(&mut self) -> Response {
        if self.book.calculate().is_none() {
            debug!("calculate ignored: no courses");
            return Response::Ignored;
        }
        Response::Redraw
    }
}
