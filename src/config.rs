//! User preferences for the gradebook form
//!
//! Preferences live in an optional TOML file. Every key may be left out,
//! and a missing file means "all defaults".

use crate::gradebook::Grade;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Errors raised while loading the preferences file
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("Failed to read config file `{path}`")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or holds an unknown grade label.
    #[error("Invalid config file `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Static text shown by the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub title: String,
    /// Shown in place of the list when there are no courses
    pub empty: String,
    /// Appended to the GPA when withdrawn courses were left out
    pub withdrawn_note: String,
    pub prompt: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Course grades".to_string(),
            empty: "No courses yet".to_string(),
            withdrawn_note: "(W excluded)".to_string(),
            prompt: "> ".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grade the selector starts on, and returns to after each add
    pub default_grade: Grade,
    /// Emphasise failing grades in the list
    pub highlight_failing: bool,
    /// Use ANSI colours
    pub color: bool,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_grade: Grade::A,
            highlight_failing: true,
            color: true,
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Load preferences from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the preferences file
    ///
    /// # Returns
    /// The parsed config, or the defaults if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse preferences from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
