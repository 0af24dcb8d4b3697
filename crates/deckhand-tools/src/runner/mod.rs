//! Command runners
//!
//! The `CommandRunner` trait is the seam between the tool clients and the
//! operating system. `ProcessRunner` executes for real over
//! `tokio::process`; `MockRunner` is a scripted in-memory double for unit
//! tests that must never touch docker, kind, kubectl or helm.

mod mock;
mod process;

pub use mock::{MockOutcome, MockRunner};
pub use process::ProcessRunner;

use async_trait::async_trait;

use crate::command::{CapturedOutput, CommandSpec};
use crate::error::Result;

/// Executes fully-rendered command specs
///
/// Implementations must be Send + Sync; the tool clients clone their
/// runner freely.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run the command with stdout and stderr collected.
    ///
    /// Returns Ok for any process that ran to completion, whatever its
    /// exit status; Err only when the program could not be spawned at
    /// all (mapped to `ToolError::MissingTool`).
    async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput>;

    /// Run the command wired to the parent's stdin, stdout and stderr.
    ///
    /// The child shares the terminal, so its own progress and errors are
    /// visible as they happen. A non-zero exit becomes
    /// `ToolError::CommandFailed` with the child's exit code.
    async fn stream(&self, spec: &CommandSpec) -> Result<()>;
}
