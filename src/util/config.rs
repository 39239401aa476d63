//! Override-path configuration for alternate JDK homes.
//!
//! The host exposes two optional string-valued overrides: one naming a
//! secondary/legacy JDK home, one naming the JDK that test tasks should
//! pin to. Both live in the host's ambient key-value stores (build
//! properties first, process environment second). They are resolved ONCE,
//! at startup, into an explicit struct; nothing downstream looks anything
//! up by string key again.
//!
//! Unset or blank values mean "no override"; they are dropped here and
//! never reach the registry.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Host property key for the legacy JDK home override.
pub const LEGACY_HOME_PROPERTY: &str = "legacyJavaHome";

/// Host property key for the test JDK home override.
pub const TEST_HOME_PROPERTY: &str = "testJavaHome";

/// Environment fallback for [`LEGACY_HOME_PROPERTY`].
pub const LEGACY_HOME_ENV: &str = "LEGACY_JAVA_HOME";

/// Environment fallback for [`TEST_HOME_PROPERTY`].
pub const TEST_HOME_ENV: &str = "TEST_JAVA_HOME";

/// Resolved override paths for alternate JDK homes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaHomeOverrides {
    /// Home of a secondary/legacy JDK, registered as a foreign
    /// installation the selection policy may fall back to.
    pub legacy_home: Option<PathBuf>,

    /// Home of the JDK that test tasks pin to.
    pub test_home: Option<PathBuf>,
}

impl JavaHomeOverrides {
    /// Resolve overrides from the host's property bag, with the process
    /// environment as fallback.
    pub fn resolve(properties: &BTreeMap<String, String>) -> Self {
        Self::resolve_with_env(properties, |key| std::env::var(key).ok())
    }

    /// Resolve with an injectable environment lookup.
    pub(crate) fn resolve_with_env(
        properties: &BTreeMap<String, String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        JavaHomeOverrides {
            legacy_home: lookup(properties, LEGACY_HOME_PROPERTY, LEGACY_HOME_ENV, &env),
            test_home: lookup(properties, TEST_HOME_PROPERTY, TEST_HOME_ENV, &env),
        }
    }

    /// Check if any override is configured.
    pub fn has_overrides(&self) -> bool {
        self.legacy_home.is_some() || self.test_home.is_some()
    }
}

/// Look up one override: property bag first, environment second.
/// Blank values count as unset.
fn lookup(
    properties: &BTreeMap<String, String>,
    property: &str,
    env_key: &str,
    env: &impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    properties
        .get(property)
        .cloned()
        .or_else(|| env(env_key))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_unset_everywhere_is_no_override() {
        let overrides = JavaHomeOverrides::resolve_with_env(&BTreeMap::new(), no_env);
        assert_eq!(overrides, JavaHomeOverrides::default());
        assert!(!overrides.has_overrides());
    }

    #[test]
    fn test_property_bag_wins_over_environment() {
        let mut properties = BTreeMap::new();
        properties.insert(LEGACY_HOME_PROPERTY.to_string(), "/opt/jdk7".to_string());

        let overrides = JavaHomeOverrides::resolve_with_env(&properties, |key| {
            (key == LEGACY_HOME_ENV).then(|| "/env/jdk7".to_string())
        });

        assert_eq!(overrides.legacy_home, Some(PathBuf::from("/opt/jdk7")));
    }

    #[test]
    fn test_environment_fallback() {
        let overrides = JavaHomeOverrides::resolve_with_env(&BTreeMap::new(), |key| {
            (key == TEST_HOME_ENV).then(|| "/env/jdk8".to_string())
        });

        assert_eq!(overrides.test_home, Some(PathBuf::from("/env/jdk8")));
        assert!(overrides.legacy_home.is_none());
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let mut properties = BTreeMap::new();
        properties.insert(LEGACY_HOME_PROPERTY.to_string(), "   ".to_string());
        properties.insert(TEST_HOME_PROPERTY.to_string(), String::new());

        let overrides = JavaHomeOverrides::resolve_with_env(&properties, no_env);
        assert!(!overrides.has_overrides());
    }

    #[test]
    fn test_overrides_resolve_independently() {
        let mut properties = BTreeMap::new();
        properties.insert(LEGACY_HOME_PROPERTY.to_string(), "/opt/jdk7".to_string());

        let overrides = JavaHomeOverrides::resolve_with_env(&properties, |key| {
            (key == TEST_HOME_ENV).then(|| "/opt/jdk11".to_string())
        });

        assert_eq!(overrides.legacy_home, Some(PathBuf::from("/opt/jdk7")));
        assert_eq!(overrides.test_home, Some(PathBuf::from("/opt/jdk11")));
    }
}
