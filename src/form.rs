//! Input fields of the add-course form

use crate::gradebook::Grade;

/// Current contents of the name field and grade selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    name: String,
    grade: Grade,
    default_grade: Grade,
}

impl Form {
    pub fn new(default_grade: Grade) -> Self {
        Self {
            name: String::new(),
            grade: default_grade,
            default_grade,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn select_grade(&mut self, grade: Grade) {
        self.grade = grade;
    }

    /// The add action is only enabled for a non-blank name
    pub fn can_add(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Clear the name and put the selector back on the default grade
    pub fn reset(&mut self) {
        self.name.clear();
        self.grade = self.default_grade;
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(Grade::default())
    }
}
