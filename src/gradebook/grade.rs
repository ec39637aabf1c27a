use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade on the fixed scale
///
/// Declaration order is the order the grade selector offers the labels in.
/// `W` marks a withdrawn course: it carries no points and is left out of
/// the GPA entirely rather than counted as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Grade {
    #[default]
    A,
    BPlus,
    B,
    CPlus,
    C,
    DPlus,
    D,
    F,
    W,
}

impl Grade {
    /// Every grade label, in selector order
    pub const ALL: [Grade; 9] = [
        Grade::A,
        Grade::BPlus,
        Grade::B,
        Grade::CPlus,
        Grade::C,
        Grade::DPlus,
        Grade::D,
        Grade::F,
        Grade::W,
    ];

    /// Canonical label as shown to the user
    pub fn label(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::F => "F",
            Grade::W => "W",
        }
    }

    /// Grade points in hundredths, or `None` for a withdrawal
    pub fn hundredths(self) -> Option<u32> {
        match self {
            Grade::A => Some(400),
            Grade::BPlus => Some(350),
            Grade::B => Some(300),
            Grade::CPlus => Some(250),
            Grade::C => Some(200),
            Grade::DPlus => Some(150),
            Grade::D => Some(100),
            Grade::F => Some(0),
            Grade::W => None,
        }
    }

    /// Grade points on the 0.0-4.0 scale, or `None` for a withdrawal
    pub fn points(self) -> Option<f64> {
        self.hundredths().map(|h| f64::from(h) / 100.0)
    }

    pub fn is_withdrawal(self) -> bool {
        self == Grade::W
    }

    pub fn is_failing(self) -> bool {
        self == Grade::F
    }

    /// Comma separated list of valid labels, used in error messages
    pub fn valid_labels() -> String {
        Grade::ALL
            .iter()
            .map(|g| g.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Grade::ALL
            .into_iter()
            .find(|g| g.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                format!(
                    "Invalid grade '{}'. Valid grades: {}",
                    s,
                    Grade::valid_labels()
                )
            })
    }
}

impl TryFrom<String> for Grade {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Grade> for String {
    fn from(grade: Grade) -> Self {
        grade.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_values() {
        assert_eq!(Grade::A.points(), Some(4.0));
        assert_eq!(Grade::BPlus.points(), Some(3.5));
        assert_eq!(Grade::DPlus.points(), Some(1.5));
        assert_eq!(Grade::F.points(), Some(0.0));
        assert_eq!(Grade::W.points(), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("b+".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!(" w ".parse::<Grade>().unwrap(), Grade::W);
        assert_eq!("A".parse::<Grade>().unwrap(), Grade::A);
    }

    #[test]
    fn test_parse_unknown_lists_valid_labels() {
        let err = "E".parse::<Grade>().unwrap_err();
        assert!(err.contains("Invalid grade 'E'"));
        assert!(err.contains("A, B+, B, C+, C, D+, D, F, W"));
    }

    #[test]
    fn test_only_withdrawal_is_excluded() {
        let excluded: Vec<Grade> = Grade::ALL
            .into_iter()
            .filter(|g| g.points().is_none())
            .collect();
        assert_eq!(excluded, vec![Grade::W]);
        assert!(Grade::W.is_withdrawal());
        assert!(Grade::F.is_failing());
        assert!(!Grade::W.is_failing());
    }
}
