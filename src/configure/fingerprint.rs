//! Invocation fingerprinting for the host's up-to-date checks.
//!
//! The host owns caching and incrementality; this module only produces the
//! value it consumes. A fingerprint captures what the configurator decided
//! for a task: the installation, its release, and the effective options.
//! A change to any of them invalidates cached outputs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::installation::JavaInstallation;
use crate::core::task::CompileTask;
use crate::core::version::JavaVersion;
use crate::util::hash::Fingerprint;

/// Fingerprint of a configured compile-task invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationFingerprint {
    /// Display name of the selected installation.
    pub installation: String,

    /// Release of the selected installation.
    pub version: JavaVersion,

    /// Short hash over the effective invocation options.
    pub options_hash: String,
}

impl InvocationFingerprint {
    /// Capture the fingerprint of a configured task.
    pub fn capture(task: &CompileTask, selected: &JavaInstallation) -> Self {
        let options = task.options();

        let mut fp = Fingerprint::new();
        fp.update_bool(options.fork);
        fp.update_opt(options.encoding.as_deref());
        fp.update_strs(options.compiler_args.iter().map(String::as_str));
        fp.update_path(options.fork_options.java_home.as_deref());

        InvocationFingerprint {
            installation: selected.display_name().to_string(),
            version: selected.version(),
            options_hash: fp.finish_short(),
        }
    }

    /// Check if the fingerprint matches (nothing has changed).
    pub fn matches(&self, other: &InvocationFingerprint) -> bool {
        self == other
    }

    /// Serialize for the host's fingerprint store.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize invocation fingerprint")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::version::JavaVersion;

    fn installation(name: &str, version: JavaVersion) -> JavaInstallation {
        JavaInstallation::new("/opt/jdk", version, name, true)
    }

    fn configured_task() -> CompileTask {
        let mut task = CompileTask::source("compileMain");
        let options = task.options_mut();
        options.fork = true;
        options.encoding = Some("UTF-8".to_string());
        options.compiler_args = vec!["-Xlint:-options".to_string()];
        task
    }

    #[test]
    fn test_same_invocation_matches() {
        let inst = installation("OpenJDK 8", JavaVersion::V8);
        let a = InvocationFingerprint::capture(&configured_task(), &inst);
        let b = InvocationFingerprint::capture(&configured_task(), &inst);
        assert!(a.matches(&b));
    }

    #[test]
    fn test_changing_installation_invalidates() {
        let task = configured_task();
        let a = InvocationFingerprint::capture(&task, &installation("OpenJDK 8", JavaVersion::V8));
        let b = InvocationFingerprint::capture(&task, &installation("Temurin 11", JavaVersion::V11));
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_changing_options_invalidates() {
        let inst = installation("OpenJDK 8", JavaVersion::V8);
        let a = InvocationFingerprint::capture(&configured_task(), &inst);

        let mut task = configured_task();
        task.options_mut().fork_options.java_home = Some("/opt/other".into());
        let b = InvocationFingerprint::capture(&task, &inst);

        assert!(!a.matches(&b));
    }

    #[test]
    fn test_json_round_trip() {
        let inst = installation("OpenJDK 8", JavaVersion::V8);
        let fingerprint = InvocationFingerprint::capture(&configured_task(), &inst);

        let json = fingerprint.to_json().unwrap();
        let back: InvocationFingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(fingerprint, back);
    }
}
