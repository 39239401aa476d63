//! Known JDK installations and version-based selection.
//!
//! The registry is built once during the host's configuration phase and is
//! read-only afterwards, so concurrent configuration passes may share it.
//!
//! Selection priority for a requested target version:
//! 1. The current installation (the JVM running the build host), when its
//!    release supports the target (invoking it needs no fork home).
//! 2. Configured override installations, in registration order.
//!
//! Anything else is a hard [`ToolchainNotFound`]; a wrong compiler is
//! never silently substituted.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::core::installation::JavaInstallation;
use crate::core::version::JavaVersion;
use crate::util::config::JavaHomeOverrides;

mod errors;
mod probe;

pub use errors::ToolchainNotFound;
pub use probe::{InstallationProbe, ProbeError, ProbedInstallation};

/// The set of JDK installations known to the build host.
///
/// Exactly one member is current; all others are foreign and require an
/// explicit fork home to be invoked.
#[derive(Debug, Clone)]
pub struct InstallationRegistry {
    /// The installation running the build host process.
    current: JavaInstallation,

    /// Foreign installations from configured overrides, in registration
    /// order.
    overrides: Vec<JavaInstallation>,

    /// Dedicated installation for test tasks, when configured.
    test: Option<JavaInstallation>,
}

impl InstallationRegistry {
    /// Build the registry by probing the current home and every configured
    /// override.
    ///
    /// `current_home` is the home of the JVM executing the build host; it
    /// is always registered and always marked current. Probe failures
    /// propagate unchanged: installation availability does not change
    /// within a build invocation, so nothing is retried or downgraded.
    pub fn new(
        current_home: impl Into<PathBuf>,
        overrides: &JavaHomeOverrides,
        probe: &dyn InstallationProbe,
    ) -> Result<Self> {
        let current_home = current_home.into();

        let probed = probe.probe(&current_home)?;
        let current = JavaInstallation::new(
            probed.java_home,
            probed.version,
            probed.display_name,
            true,
        );
        tracing::debug!(
            "registered current Java installation: {} (Java {})",
            current,
            current.version()
        );

        let mut registered = Vec::new();
        if let Some(home) = &overrides.legacy_home {
            match probe_foreign(home, &current_home, probe)? {
                Some(installation) => {
                    tracing::debug!(
                        "registered legacy Java installation: {} (Java {})",
                        installation,
                        installation.version()
                    );
                    registered.push(installation);
                }
                None => {
                    tracing::debug!(
                        "legacy override {} is the current installation, skipping",
                        home.display()
                    );
                }
            }
        }

        let test = match &overrides.test_home {
            Some(home) => {
                let installation = probe_foreign(home, &current_home, probe)?;
                if installation.is_none() {
                    tracing::debug!(
                        "test override {} is the current installation, skipping",
                        home.display()
                    );
                }
                installation
            }
            None => None,
        };

        Ok(InstallationRegistry {
            current,
            overrides: registered,
            test,
        })
    }

    /// Pick the installation that should compile for `requested`.
    ///
    /// The current installation wins whenever it supports the target, even
    /// when an override matches the target exactly: compiling on the
    /// current JVM needs no fork home. Overrides are tried in registration
    /// order otherwise.
    pub fn jdk_for_compilation(
        &self,
        requested: JavaVersion,
    ) -> Result<&JavaInstallation, ToolchainNotFound> {
        if self.current.version().supports(requested) {
            return Ok(&self.current);
        }

        match self
            .overrides
            .iter()
            .find(|installation| installation.version().supports(requested))
        {
            Some(installation) => {
                tracing::debug!(
                    "target Java {} needs foreign installation {}",
                    requested,
                    installation
                );
                Ok(installation)
            }
            None => Err(self.not_found(requested)),
        }
    }

    /// The installation running the build host. Always exists.
    pub fn current_installation(&self) -> &JavaInstallation {
        &self.current
    }

    /// Pick the installation test tasks should use.
    ///
    /// The test override is taken as-is when configured; it exists
    /// precisely to pin test tasks to a specific JVM. Without one, test
    /// tasks follow the ordinary compilation policy.
    pub fn installation_for_test(
        &self,
        requested: JavaVersion,
    ) -> Result<&JavaInstallation, ToolchainNotFound> {
        match &self.test {
            Some(installation) => Ok(installation),
            None => self.jdk_for_compilation(requested),
        }
    }

    /// Iterate over every known installation: current first, then
    /// overrides in registration order, then the test slot.
    pub fn installations(&self) -> impl Iterator<Item = &JavaInstallation> {
        std::iter::once(&self.current)
            .chain(self.overrides.iter())
            .chain(self.test.iter())
    }

    fn not_found(&self, requested: JavaVersion) -> ToolchainNotFound {
        ToolchainNotFound {
            requested,
            available: self
                .installations()
                .map(|installation| {
                    format!("{} (Java {})", installation, installation.version())
                })
                .collect(),
        }
    }
}

/// Probe an override home as a foreign installation.
///
/// Returns `None` when the home is the current installation's: it is
/// already registered, and registering it twice would break the
/// exactly-one-current invariant.
fn probe_foreign(
    home: &Path,
    current_home: &Path,
    probe: &dyn InstallationProbe,
) -> Result<Option<JavaInstallation>, ProbeError> {
    if home == current_home {
        return Ok(None);
    }

    let probed = probe.probe(home)?;
    Ok(Some(JavaInstallation::new(
        probed.java_home,
        probed.version,
        probed.display_name,
        false,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeProbe;

    fn registry(current: JavaVersion, overrides: JavaHomeOverrides) -> InstallationRegistry {
        let probe = FakeProbe::new()
            .with("/opt/current", current, "Current JDK")
            .with("/opt/jdk7", JavaVersion::V7, "Legacy JDK 7")
            .with("/opt/jdk11", JavaVersion::V11, "Test JDK 11");
        InstallationRegistry::new("/opt/current", &overrides, &probe).unwrap()
    }

    fn legacy_override() -> JavaHomeOverrides {
        JavaHomeOverrides {
            legacy_home: Some("/opt/jdk7".into()),
            test_home: None,
        }
    }

    #[test]
    fn test_current_wins_when_it_supports_the_target() {
        let registry = registry(JavaVersion::V8, legacy_override());

        let chosen = registry.jdk_for_compilation(JavaVersion::V7).unwrap();
        assert!(chosen.is_current());
        assert_eq!(chosen.version(), JavaVersion::V8);
    }

    #[test]
    fn test_current_wins_even_over_exact_override_match() {
        // The override is an exact match for the target, but the current
        // installation also satisfies it and needs no fork home.
        let registry = registry(JavaVersion::V8, legacy_override());

        let chosen = registry.jdk_for_compilation(JavaVersion::V7).unwrap();
        assert_ne!(chosen.display_name(), "Legacy JDK 7");
    }

    #[test]
    fn test_override_used_when_current_is_too_old() {
        let probe = FakeProbe::new()
            .with("/opt/jdk7", JavaVersion::V7, "Current JDK 7")
            .with("/opt/jdk11", JavaVersion::V11, "Newer JDK 11");
        let overrides = JavaHomeOverrides {
            legacy_home: Some("/opt/jdk11".into()),
            test_home: None,
        };
        let registry = InstallationRegistry::new("/opt/jdk7", &overrides, &probe).unwrap();

        let chosen = registry.jdk_for_compilation(JavaVersion::V8).unwrap();
        assert!(!chosen.is_current());
        assert_eq!(chosen.display_name(), "Newer JDK 11");
    }

    #[test]
    fn test_unsatisfiable_target_is_a_hard_error() {
        let registry = registry(JavaVersion::V8, legacy_override());

        let err = registry.jdk_for_compilation(JavaVersion::V17).unwrap_err();
        assert_eq!(err.requested, JavaVersion::V17);
        assert_eq!(err.available.len(), 2);
        assert!(err.available.iter().any(|name| name.contains("Current JDK")));
        assert!(err.available.iter().any(|name| name.contains("Legacy JDK 7")));
    }

    #[test]
    fn test_exactly_one_current_installation() {
        let registry = registry(
            JavaVersion::V8,
            JavaHomeOverrides {
                legacy_home: Some("/opt/jdk7".into()),
                test_home: Some("/opt/jdk11".into()),
            },
        );

        let currents: Vec<_> = registry
            .installations()
            .filter(|installation| installation.is_current())
            .collect();
        assert_eq!(currents.len(), 1);
        assert_eq!(currents[0], registry.current_installation());
    }

    #[test]
    fn test_override_equal_to_current_home_is_skipped() {
        let probe = FakeProbe::new().with("/opt/current", JavaVersion::V8, "Current JDK");
        let overrides = JavaHomeOverrides {
            legacy_home: Some("/opt/current".into()),
            test_home: Some("/opt/current".into()),
        };
        let registry = InstallationRegistry::new("/opt/current", &overrides, &probe).unwrap();

        assert_eq!(registry.installations().count(), 1);
        // Test tasks fall back to the ordinary policy.
        let chosen = registry.installation_for_test(JavaVersion::V7).unwrap();
        assert!(chosen.is_current());
    }

    #[test]
    fn test_probe_failure_propagates() {
        let probe = FakeProbe::new().with("/opt/current", JavaVersion::V8, "Current JDK");
        let overrides = JavaHomeOverrides {
            legacy_home: Some("/opt/nonexistent".into()),
            test_home: None,
        };

        let result = InstallationRegistry::new("/opt/current", &overrides, &probe);
        assert!(result.is_err());
    }

    #[test]
    fn test_test_override_is_taken_as_is() {
        let registry = registry(
            JavaVersion::V8,
            JavaHomeOverrides {
                legacy_home: None,
                test_home: Some("/opt/jdk11".into()),
            },
        );

        let chosen = registry.installation_for_test(JavaVersion::V7).unwrap();
        assert_eq!(chosen.display_name(), "Test JDK 11");
        assert!(!chosen.is_current());
    }

    #[test]
    fn test_unset_overrides_never_become_installations() {
        let registry = registry(JavaVersion::V8, JavaHomeOverrides::default());
        assert_eq!(registry.installations().count(), 1);
    }
}
