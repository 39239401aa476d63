//! Located JDK installations.
//!
//! An installation is a verified fact about the host filesystem: a home
//! directory, the release found there, and whether that release is the one
//! running the build host itself. Installations are constructed by the
//! registry during the configuration phase and never change afterwards.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::version::JavaVersion;

/// A located, version-identified JDK on the host filesystem.
///
/// Identity is the home directory: two descriptors for the same path are
/// the same installation, whatever the probe reported about them.
#[derive(Debug, Clone, Serialize)]
pub struct JavaInstallation {
    /// Home directory of the installation.
    java_home: PathBuf,

    /// Release reported by the probe.
    version: JavaVersion,

    /// Human-readable name reported by the probe (vendor + release).
    display_name: String,

    /// Whether this installation is running the build host process.
    current: bool,
}

impl JavaInstallation {
    /// Create a new installation descriptor.
    pub fn new(
        java_home: impl Into<PathBuf>,
        version: JavaVersion,
        display_name: impl Into<String>,
        current: bool,
    ) -> Self {
        JavaInstallation {
            java_home: java_home.into(),
            version,
            display_name: display_name.into(),
            current,
        }
    }

    /// Get the home directory.
    pub fn java_home(&self) -> &Path {
        &self.java_home
    }

    /// Get the reported release.
    pub fn version(&self) -> JavaVersion {
        self.version
    }

    /// Get the human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether this installation is running the build host process.
    ///
    /// Foreign installations need an explicit fork home to be invoked.
    pub fn is_current(&self) -> bool {
        self.current
    }
}

impl PartialEq for JavaInstallation {
    fn eq(&self, other: &Self) -> bool {
        self.java_home == other.java_home
    }
}

impl Eq for JavaInstallation {}

impl Hash for JavaInstallation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.java_home.hash(state);
    }
}

impl fmt::Display for JavaInstallation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.java_home.display())
    }
}
