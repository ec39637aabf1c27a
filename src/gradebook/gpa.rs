use super::course::Course;
use std::fmt;

/// A grade-point average with exactly two decimal places
///
/// Stored as integer hundredths so that rounding happens once, in
/// [`compute`], and never again when formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Gpa(u32);

impl Gpa {
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    pub fn hundredths(self) -> u32 {
        self.0
    }

    pub fn value(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for Gpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Outcome of the last explicit calculation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GpaResult {
    /// Nothing calculated since the list last changed
    #[default]
    NotComputed,
    /// Snapshot taken when the user asked for it
    Computed {
        gpa: Gpa,
        /// Courses that went into the average
        counted: usize,
        /// Length of the whole list, withdrawals included
        total: usize,
    },
}

impl GpaResult {
    pub fn gpa(&self) -> Option<Gpa> {
        match self {
            GpaResult::NotComputed => None,
            GpaResult::Computed { gpa, .. } => Some(*gpa),
        }
    }

    /// True when some courses were withdrawn and left out of the average
    pub fn excludes_withdrawals(&self) -> bool {
        match self {
            GpaResult::NotComputed => false,
            GpaResult::Computed { counted, total, .. } => counted != total,
        }
    }
}

/// Compute the GPA of a set of courses
///
/// Withdrawn courses are dropped from both the sum and the count. If
/// nothing is left (including an empty slice) the result is `0.00`.
///
/// The mean is rounded half-up to two decimal places. Grade points are
/// whole hundredths, so the rounding is done in integers:
/// `round(sum / n) = (2 * sum + n) / (2 * n)`.
pub fn compute(courses: &[Course]) -> Gpa {
    let (sum, n) = courses
        .iter()
        .filter_map(|c| c.grade().hundredths())
        .fold((0u64, 0u64), |(sum, n), points| (sum + u64::from(points), n + 1));

    if n == 0 {
        return Gpa::default();
    }

    let rounded = (2 * sum + n) / (2 * n);
    // Mean of values in 0..=400 stays in 0..=400.
    Gpa(rounded as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradebook::course::CourseId;
    use crate::gradebook::grade::Grade;

    fn courses(grades: &[Grade]) -> Vec<Course> {
        grades
            .iter()
            .enumerate()
            .map(|(i, g)| {
                Course::new(CourseId::new(i as u32 + 1), format!("Course {}", i), *g)
            })
            .collect()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(compute(&[]).to_string(), "0.00");
    }

    #[test]
    fn test_only_withdrawals_is_zero() {
        let gpa = compute(&courses(&[Grade::W, Grade::W]));
        assert_eq!(gpa, Gpa::from_hundredths(0));
        assert_eq!(gpa.to_string(), "0.00");
    }

    #[test]
    fn test_withdrawal_is_excluded_not_zero() {
        let gpa = compute(&courses(&[Grade::A, Grade::B, Grade::W]));
        assert_eq!(gpa.to_string(), "3.50");
    }

    #[test]
    fn test_single_fail() {
        assert_eq!(compute(&courses(&[Grade::F])).to_string(), "0.00");
    }

    #[test]
    fn test_rounds_to_two_places() {
        // 11.0 / 3 = 3.666..
        let gpa = compute(&courses(&[Grade::A, Grade::A, Grade::B]));
        assert_eq!(gpa.to_string(), "3.67");
        // 10.0 / 3 = 3.333..
        let gpa = compute(&courses(&[Grade::A, Grade::B, Grade::B]));
        assert_eq!(gpa.to_string(), "3.33");
    }

    #[test]
    fn test_rounds_half_up() {
        // 25.0 / 8 = 3.125
        let mut grades = vec![Grade::A];
        grades.extend([Grade::B; 7]);
        assert_eq!(compute(&courses(&grades)).to_string(), "3.13");
    }

    #[test]
    fn test_gpa_value_and_display() {
        let gpa = Gpa::from_hundredths(375);
        assert_eq!(gpa.value(), 3.75);
        assert_eq!(gpa.to_string(), "3.75");
        assert_eq!(Gpa::from_hundredths(400).to_string(), "4.00");
        assert_eq!(Gpa::from_hundredths(5).to_string(), "0.05");
    }

    #[test]
    fn test_result_helpers() {
        assert_eq!(GpaResult::NotComputed.gpa(), None);
        assert!(!GpaResult::NotComputed.excludes_withdrawals());

        let result = GpaResult::Computed {
            gpa: Gpa::from_hundredths(375),
            counted: 2,
            total: 3,
        };
        assert_eq!(result.gpa(), Some(Gpa::from_hundredths(375)));
        assert!(result.excludes_withdrawals());
    }
}
