//! Test utilities and mocks for drydock unit tests.
//!
//! Provides a probe backed by an in-memory table of known homes, so
//! registry and configurator tests never touch a real JDK.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::version::JavaVersion;
use crate::registry::{InstallationProbe, ProbeError, ProbedInstallation};

/// Probe backed by a fixed table of known installation homes.
///
/// Probing an unknown home fails with [`ProbeError::InvalidHome`], the way
/// a real probe rejects a directory with no JDK in it.
#[derive(Debug, Clone, Default)]
pub struct FakeProbe {
    known: HashMap<PathBuf, (JavaVersion, String)>,
}

impl FakeProbe {
    /// Create a probe that knows no installations.
    pub fn new() -> Self {
        FakeProbe {
            known: HashMap::new(),
        }
    }

    /// Teach the probe about an installation home.
    pub fn with(
        mut self,
        java_home: impl Into<PathBuf>,
        version: JavaVersion,
        display_name: impl Into<String>,
    ) -> Self {
        self.known
            .insert(java_home.into(), (version, display_name.into()));
        self
    }
}

impl InstallationProbe for FakeProbe {
    fn probe(&self, java_home: &Path) -> Result<ProbedInstallation, ProbeError> {
        match self.known.get(java_home) {
            Some((version, display_name)) => Ok(ProbedInstallation {
                java_home: java_home.to_path_buf(),
                version: *version,
                display_name: display_name.clone(),
            }),
            None => Err(ProbeError::InvalidHome {
                path: java_home.to_path_buf(),
            }),
        }
    }
}
