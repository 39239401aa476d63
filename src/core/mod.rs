//! Core data structures for drydock.
//!
//! This module contains the foundational types used throughout the crate:
//! - JDK release versions
//! - Located installation descriptors
//! - Compile tasks and their invocation options

pub mod installation;
pub mod task;
pub mod version;

pub use installation::JavaInstallation;
pub use task::{
    CompileOptions, CompileTask, ForkOptions, ResourceCompileTask, SourceCompileTask, TaskKind,
    TestCompileTask,
};
pub use version::{JavaVersion, VersionParseError};
