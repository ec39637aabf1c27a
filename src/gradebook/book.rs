use super::course::{Course, CourseId};
use super::course_list::CourseList;
use super::gpa::{self, GpaResult};
use super::grade::Grade;
use tracing::debug;

/// The course list together with the last calculated GPA
///
/// The GPA is a snapshot: it is only produced by [`GradeBook::calculate`]
/// and is cleared by every add or remove, so whatever is stored always
/// matches the list as it was at the last explicit calculation.
#[derive(Debug, Default)]
pub struct GradeBook {
    courses: CourseList,
    result: GpaResult,
}

impl GradeBook {
    /// Create a new empty gradebook
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a course and clear the GPA
    ///
    /// A blank name is rejected before anything changes, so it leaves the
    /// GPA in place as well.
    pub fn add(&mut self, name: &str, grade: Grade) -> Option<CourseId> {
        let id = self.courses.add(name, grade)?;
        self.result = GpaResult::NotComputed;
        debug!(%id, %grade, "course added");
        Some(id)
    }

    /// Remove a course and clear the GPA
    ///
    /// The GPA is cleared even if no course had this id.
    pub fn remove(&mut self, id: CourseId) -> Option<Course> {
        let removed = self.courses.remove(id);
        self.result = GpaResult::NotComputed;
        debug!(%id, found = removed.is_some(), "course removed");
        removed
    }

    /// Calculation is only offered while there is at least one course
    pub fn can_calculate(&self) -> bool {
        !self.courses.is_empty()
    }

    /// Calculate and store the GPA for the current list
    ///
    /// # Returns
    /// The stored result, or `None` when the list is empty (nothing is
    /// calculated and the state is left alone)
    pub fn calculate(&mut self) -> Option<&GpaResult> {
        if !self.can_calculate() {
            return None;
        }

        let gpa = gpa::compute(self.courses.as_slice());
        self.result = GpaResult::Computed {
            gpa,
            counted: self.courses.counted(),
            total: self.courses.len(),
        };
        debug!(
            %gpa,
            counted = self.courses.counted(),
            total = self.courses.len(),
            "gpa calculated"
        );
        Some(&self.result)
    }

    pub fn result(&self) -> &GpaResult {
        &self.result
    }

    pub fn courses(&self) -> &CourseList {
        &self.courses
    }
}
