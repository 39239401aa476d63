//! Registry resolution errors.

use thiserror::Error;

use crate::core::version::JavaVersion;
use crate::util::config::{LEGACY_HOME_ENV, LEGACY_HOME_PROPERTY};
use crate::util::diagnostic::Diagnostic;

/// No known installation can compile for a requested target version.
///
/// Fatal to the configuration phase: the build must abort rather than
/// proceed with a wrong compiler.
#[derive(Debug, Clone, Error)]
#[error("no Java installation available for target version {requested}")]
pub struct ToolchainNotFound {
    /// The version the task needed to compile for.
    pub requested: JavaVersion,

    /// Every installation the registry knows, for the error message.
    pub available: Vec<String>,
}

impl ToolchainNotFound {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(format!(
            "no Java installation available for target version {}",
            self.requested
        ));

        for installation in &self.available {
            diag = diag.with_context(format!("known installation: {}", installation));
        }

        diag.with_suggestion(format!(
            "set `{}` (or {}) to the home of a JDK that supports Java {}",
            LEGACY_HOME_PROPERTY, LEGACY_HOME_ENV, self.requested
        ))
    }
}
