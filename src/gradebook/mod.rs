//! Gradebook domain models and business logic
//!
//! This module contains the core data structures and the GPA calculation.
//! It is split into submodules:
//! - `grade`: Fixed grade scale (label to points, withdrawal excluded)
//! - `course`: Course record and its id
//! - `course_list`: Ordered, newest-first course store
//! - `gpa`: Pure GPA calculation and the calculated-result state
//! - `book`: Course list plus cached GPA, with invalidation on change

mod book;
mod course;
mod course_list;
pub mod gpa;
mod grade;

// Re-export all public types
pub use book::GradeBook;
pub use course::{Course, CourseId};
pub use course_list::CourseList;
pub use gpa::{Gpa, GpaResult, compute};
pub use grade::Grade;
