//! Probe seam for verifying candidate JDK homes.
//!
//! How a home directory is inspected (running `java -version`, reading
//! release metadata, memoizing results) is the host's concern. The
//! registry only consumes verified descriptors, so the seam is a trait.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::version::JavaVersion;

/// A verified installation descriptor returned by a probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedInstallation {
    /// Home directory that was probed.
    pub java_home: PathBuf,

    /// Release found there.
    pub version: JavaVersion,

    /// Human-readable name (vendor + release).
    pub display_name: String,
}

/// Failure to verify a candidate home directory.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The path does not point at a Java installation.
    #[error("not a Java installation: {}", path.display())]
    InvalidHome { path: PathBuf },

    /// The path looks like an installation but could not be inspected.
    #[error("failed to inspect Java installation at {}: {message}", path.display())]
    ProbeFailed { path: PathBuf, message: String },
}

/// Verifies a candidate home directory and reports what lives there.
pub trait InstallationProbe {
    /// Probe `java_home`, returning a verified descriptor or failing if
    /// the path is not a valid installation.
    fn probe(&self, java_home: &Path) -> Result<ProbedInstallation, ProbeError>;
}
