//! Compile tasks and their invocation options.
//!
//! The host's task graph exposes three kinds of compile task. They form a
//! closed set, so they are modeled as a tagged variant; each variant
//! carries only the fields its kind actually has, and the configurator
//! dispatches over the variant once per concern.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// The kind of a compile task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// Main-source compilation.
    Source,
    /// Embedded-language/resource compilation.
    Resource,
    /// Test-source compilation.
    Test,
}

impl TaskKind {
    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Source => "source",
            TaskKind::Resource => "resource",
            TaskKind::Test => "test",
        }
    }
}

/// Fork settings for out-of-process compiler execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForkOptions {
    /// Explicit alternate installation home for the forked compiler.
    ///
    /// `None` means the forked process uses the current installation.
    pub java_home: Option<PathBuf>,
}

/// Invocation options for a compile task.
///
/// Created by the host per task; mutated exactly once by the configurator
/// during the configuration phase, before any task executes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Run the compiler as a separate OS process.
    pub fork: bool,

    /// Source/output text encoding. `None` means the platform default.
    pub encoding: Option<String>,

    /// Compiler command-line flags.
    pub compiler_args: Vec<String>,

    /// Fork settings, meaningful only when `fork` is set.
    pub fork_options: ForkOptions,

    /// Declared input properties, consumed by the host's up-to-date checks.
    pub inputs: BTreeMap<String, String>,
}

impl CompileOptions {
    /// Create fresh options the way the host hands them out: nothing
    /// forced, nothing recorded.
    pub fn new() -> Self {
        CompileOptions::default()
    }
}

/// A main-source compile task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceCompileTask {
    /// Task name in the host's task graph.
    pub name: String,

    /// Invocation options.
    pub options: CompileOptions,

    /// The host's incremental-compilation toggle.
    pub incremental: bool,
}

/// An embedded-language/resource compile task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCompileTask {
    /// Task name in the host's task graph.
    pub name: String,

    /// Invocation options.
    pub options: CompileOptions,

    /// Encoding of the embedded sources themselves, distinct from the
    /// compiler's own encoding option.
    pub source_encoding: Option<String>,
}

/// A test-source compile task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCompileTask {
    /// Task name in the host's task graph.
    pub name: String,

    /// Invocation options.
    pub options: CompileOptions,
}

/// A compile task in the host's task graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileTask {
    Source(SourceCompileTask),
    Resource(ResourceCompileTask),
    Test(TestCompileTask),
}

impl CompileTask {
    /// Create a main-source compile task with fresh options.
    pub fn source(name: impl Into<String>) -> Self {
        CompileTask::Source(SourceCompileTask {
            name: name.into(),
            options: CompileOptions::new(),
            incremental: false,
        })
    }

    /// Create a resource compile task with fresh options.
    pub fn resource(name: impl Into<String>) -> Self {
        CompileTask::Resource(ResourceCompileTask {
            name: name.into(),
            options: CompileOptions::new(),
            source_encoding: None,
        })
    }

    /// Create a test compile task with fresh options.
    pub fn test(name: impl Into<String>) -> Self {
        CompileTask::Test(TestCompileTask {
            name: name.into(),
            options: CompileOptions::new(),
        })
    }

    /// Get the task name.
    pub fn name(&self) -> &str {
        match self {
            CompileTask::Source(t) => &t.name,
            CompileTask::Resource(t) => &t.name,
            CompileTask::Test(t) => &t.name,
        }
    }

    /// Get the task kind.
    pub fn kind(&self) -> TaskKind {
        match self {
            CompileTask::Source(_) => TaskKind::Source,
            CompileTask::Resource(_) => TaskKind::Resource,
            CompileTask::Test(_) => TaskKind::Test,
        }
    }

    /// Get the invocation options.
    pub fn options(&self) -> &CompileOptions {
        match self {
            CompileTask::Source(t) => &t.options,
            CompileTask::Resource(t) => &t.options,
            CompileTask::Test(t) => &t.options,
        }
    }

    /// Get the invocation options for mutation.
    pub fn options_mut(&mut self) -> &mut CompileOptions {
        match self {
            CompileTask::Source(t) => &mut t.options,
            CompileTask::Resource(t) => &mut t.options,
            CompileTask::Test(t) => &mut t.options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_options_force_nothing() {
        let options = CompileOptions::new();
        assert!(!options.fork);
        assert!(options.encoding.is_none());
        assert!(options.compiler_args.is_empty());
        assert!(options.fork_options.java_home.is_none());
        assert!(options.inputs.is_empty());
    }

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(CompileTask::source("compileMain").kind(), TaskKind::Source);
        assert_eq!(
            CompileTask::resource("compileEmbedded").kind(),
            TaskKind::Resource
        );
        assert_eq!(CompileTask::test("compileTest").kind(), TaskKind::Test);
    }

    #[test]
    fn test_options_accessors_agree() {
        let mut task = CompileTask::source("compileMain");
        task.options_mut().fork = true;
        assert!(task.options().fork);
    }
}
