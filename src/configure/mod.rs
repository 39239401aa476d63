//! Compile-task invocation policy.
//!
//! Applied once per task during the host's configuration phase, after
//! project configuration has settled and before any task executes.
//!
//! The policy is deterministic across operating systems: compilation
//! always forks out of the host process, encoding is pinned to UTF-8
//! rather than the platform default, and the compiler's diagnostic flags
//! are a fixed baseline. When the selected installation is not the one
//! running the host, the task's fork options name its home explicitly so
//! the foreign compiler executable is invoked.

use crate::core::installation::JavaInstallation;
use crate::core::task::CompileTask;
use crate::core::version::JavaVersion;
use crate::registry::{InstallationRegistry, ToolchainNotFound};

pub mod fingerprint;

pub use fingerprint::InvocationFingerprint;

/// Oldest release the tooling still compiles for. Declared targets below
/// this are raised to it.
pub const TARGET_VERSION_FLOOR: JavaVersion = JavaVersion::V7;

/// Source/output encoding pinned on every compile task.
pub const SOURCE_ENCODING: &str = "UTF-8";

/// Baseline diagnostic flags: silence warnings about legacy
/// `-source`/`-target` combinations and about classpath entries that do
/// not exist. Neither category says anything about the code being
/// compiled.
pub const BASELINE_COMPILER_ARGS: [&str; 2] = ["-Xlint:-options", "-Xlint:-path"];

/// Input property under which the installation choice is recorded, so a
/// change of installation invalidates the host's cached outputs.
pub const INSTALLATION_INPUT_PROPERTY: &str = "javaInstallation";

/// Apply fork-aware, deterministic invocation settings to one compile
/// task.
///
/// The effective target is `max(target_compatibility, floor)`. The
/// installation is resolved before anything is mutated, so a failed
/// resolution leaves the task untouched. Reconfiguring an already
/// configured task converges to the same option values.
pub fn configure_compile_task(
    task: &mut CompileTask,
    target_compatibility: JavaVersion,
    registry: &InstallationRegistry,
) -> Result<(), ToolchainNotFound> {
    let effective = target_compatibility.max(TARGET_VERSION_FLOOR);

    let selected = if matches!(task, CompileTask::Test(_)) {
        registry.installation_for_test(effective)?
    } else {
        registry.jdk_for_compilation(effective)?
    };

    let recorded = recorded_installation(task, selected, registry)
        .display_name()
        .to_string();

    apply_invocation_options(task, selected);
    task.options_mut()
        .inputs
        .insert(INSTALLATION_INPUT_PROPERTY.to_string(), recorded);

    tracing::debug!(
        "configured {} task `{}` for Java {} using {}",
        task.kind().as_str(),
        task.name(),
        effective,
        selected
    );
    Ok(())
}

/// Invocation-options concern: one dispatch point over the task kinds.
fn apply_invocation_options(task: &mut CompileTask, selected: &JavaInstallation) {
    let fork_home = if selected.is_current() {
        None
    } else {
        Some(selected.java_home().to_path_buf())
    };

    let options = task.options_mut();
    options.fork = true;
    options.encoding = Some(SOURCE_ENCODING.to_string());
    options.compiler_args = BASELINE_COMPILER_ARGS.iter().map(|s| s.to_string()).collect();
    options.fork_options.java_home = fork_home;

    match task {
        CompileTask::Source(t) => t.incremental = true,
        CompileTask::Resource(t) => t.source_encoding = Some(SOURCE_ENCODING.to_string()),
        CompileTask::Test(_) => {}
    }
}

/// Input-fingerprint concern: which installation participates in the
/// host's up-to-date check for this task kind.
///
/// Resource tasks record the current installation: their compiler runs on
/// the host's own JVM regardless of which toolchain the emitted classfiles
/// target.
fn recorded_installation<'a>(
    task: &CompileTask,
    selected: &'a JavaInstallation,
    registry: &'a InstallationRegistry,
) -> &'a JavaInstallation {
    match task {
        CompileTask::Source(_) | CompileTask::Test(_) => selected,
        CompileTask::Resource(_) => registry.current_installation(),
    }
}
