use super::course::{Course, CourseId};
use super::grade::Grade;

/// Ordered collection of courses, newest first
#[derive(Debug, Default)]
pub struct CourseList {
    /// Courses in display order. New entries go to the front and nothing
    /// else ever reorders them.
    courses: Vec<Course>,

    /// Counter for generating unique course IDs
    id_counter: u32,
}

impl CourseList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_id(&mut self) -> CourseId {
        self.id_counter += 1;
        CourseId::new(self.id_counter)
    }

    /// Add a course at the front of the list
    ///
    /// # Arguments
    /// * `name` - Course name; surrounding whitespace is trimmed
    /// * `grade` - Grade label for the course
    ///
    /// # Returns
    /// The id of the new course, or `None` if the trimmed name was empty
    /// (the list is left untouched in that case)
    pub fn add(&mut self, name: &str, grade: Grade) -> Option<CourseId> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let id = self.generate_id();
        self.courses.insert(0, Course::new(id, name.to_string(), grade));
        Some(id)
    }

    /// Remove a course by id
    ///
    /// # Returns
    /// The removed course, or `None` if no course had that id
    pub fn remove(&mut self, id: CourseId) -> Option<Course> {
        let pos = self.courses.iter().position(|c| c.id() == id)?;
        Some(self.courses.remove(pos))
    }

    /// Find a course by id
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    pub fn as_slice(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Number of courses that count towards the GPA (everything but withdrawals)
    pub fn counted(&self) -> usize {
        self.courses
            .iter()
            .filter(|c| !c.grade().is_withdrawal())
            .count()
    }
}
