//! Drydock - JDK toolchain selection for JVM build hosts.
//!
//! This crate is a plugin-style library for a build-automation host: the
//! host owns the task graph, scheduling, and caching; drydock decides
//! which installed JDK compiles each task and pins deterministic,
//! fork-aware invocation options on it.
//!
//! Two cooperating pieces:
//! - [`registry::InstallationRegistry`] holds the known JDK installations
//!   (current JVM + configured overrides) and the version-based selection
//!   policy.
//! - [`configure::configure_compile_task`] runs the per-task configuration
//!   pass: force forking and UTF-8, pin baseline diagnostic flags, set an
//!   explicit fork home for foreign installations, and record the choice
//!   as a declared input property.
//!
//! Hosts construct the registry once, after resolving the override
//! configuration, and thread it through explicitly:
//!
//! ```ignore
//! let overrides = JavaHomeOverrides::resolve(&host_properties);
//! let registry = InstallationRegistry::new(current_java_home, &overrides, &probe)?;
//! for task in compile_tasks.iter_mut() {
//!     configure_compile_task(task, project.target_compatibility, &registry)?;
//! }
//! ```

pub mod configure;
pub mod core;
pub mod registry;
pub mod util;

/// Test utilities and mocks for drydock unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides a fake installation probe backed by an
/// in-memory table.
#[cfg(test)]
pub mod test_support;

pub use crate::configure::{configure_compile_task, InvocationFingerprint};
pub use crate::core::{
    installation::JavaInstallation, task::CompileTask, version::JavaVersion,
};
pub use crate::registry::{InstallationProbe, InstallationRegistry, ToolchainNotFound};
pub use crate::util::config::JavaHomeOverrides;
