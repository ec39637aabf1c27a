use super::grade::Grade;
use std::fmt;
use std::str::FromStr;

/// Identity of a course within one gradebook
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice, even after the course holding it is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(u32);

impl CourseId {
    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for CourseId {
    type Err = String;

    /// Accepts both the displayed form (`#3`) and a bare number (`3`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(CourseId)
            .map_err(|_| {
                format!(
                    "Invalid course ID '{}'. Use the ID shown in the list (e.g., '#3')",
                    s
                )
            })
    }
}

/// A course record: identity, name and grade
///
/// Courses are never edited after creation; fields are only readable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    id: CourseId,
    name: String,
    grade: Grade,
}

impl Course {
    /// The name must already be trimmed and non-empty; `CourseList::add`
    /// is the only caller and checks this.
    pub(crate) fn new(id: CourseId, name: String, grade: Grade) -> Self {
        Self { id, name, grade }
    }

    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
