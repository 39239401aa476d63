//! JDK release versions.
//!
//! Java releases come in two textual forms: the legacy `1.x` scheme used
//! through Java 8 (`"1.7"`) and the plain major number used afterwards
//! (`"11"`). Both forms parse to the same ordered value, and display
//! follows the convention of the release itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A JDK major release.
///
/// Totally ordered by major number, so `max()` and range comparisons work
/// the way version arithmetic reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct JavaVersion {
    major: u32,
}

impl JavaVersion {
    pub const V6: JavaVersion = JavaVersion::new(6);
    pub const V7: JavaVersion = JavaVersion::new(7);
    pub const V8: JavaVersion = JavaVersion::new(8);
    pub const V11: JavaVersion = JavaVersion::new(11);
    pub const V17: JavaVersion = JavaVersion::new(17);
    pub const V21: JavaVersion = JavaVersion::new(21);

    /// Create a version from a major release number.
    pub const fn new(major: u32) -> Self {
        JavaVersion { major }
    }

    /// Get the major release number.
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Whether a toolchain of this version can emit classfiles for `target`.
    ///
    /// A JDK compiles for its own release and everything older.
    pub fn supports(&self, target: JavaVersion) -> bool {
        *self >= target
    }
}

/// Failure to parse a Java version string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid Java version `{input}`")]
pub struct VersionParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for JavaVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let invalid = || VersionParseError {
            input: s.to_string(),
        };

        // Legacy "1.x" form, used through Java 8.
        let digits = trimmed.strip_prefix("1.").unwrap_or(trimmed);

        let major: u32 = digits.parse().map_err(|_| invalid())?;
        if major == 0 {
            return Err(invalid());
        }

        Ok(JavaVersion::new(major))
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.major <= 8 {
            write!(f, "1.{}", self.major)
        } else {
            write!(f, "{}", self.major)
        }
    }
}

impl TryFrom<String> for JavaVersion {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<JavaVersion> for String {
    fn from(version: JavaVersion) -> Self {
        version.to_string()
    }
}
