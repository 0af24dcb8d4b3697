//! Real command execution over tokio::process

use async_trait::async_trait;
use console::style;
use std::io::ErrorKind;
use tracing::debug;

use super::CommandRunner;
use crate::command::{CapturedOutput, CommandSpec};
use crate::error::{Result, ToolError};

/// Runs commands as child processes
///
/// Streamed commands are echoed make-style (`$ kind create cluster ...`)
/// before they run; quiet captures echo nothing, which keeps existence
/// probes silent.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    echo: bool,
}

impl ProcessRunner {
    /// Create a runner that echoes streamed commands.
    pub fn new() -> Self {
        Self { echo: true }
    }

    /// Disable command echo.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    fn build(spec: &CommandSpec) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(spec.program());
        cmd.args(spec.argv());
        cmd
    }

    fn map_spawn_error(spec: &CommandSpec, err: std::io::Error) -> ToolError {
        if err.kind() == ErrorKind::NotFound {
            ToolError::missing(spec.program())
        } else {
            ToolError::Io(err)
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn capture(&self, spec: &CommandSpec) -> Result<CapturedOutput> {
        debug!(command = %spec, "capturing");

        let output = Self::build(spec)
            .stdin(std::process::Stdio::null())
            .output()
            .await
            .map_err(|e| Self::map_spawn_error(spec, e))?;

        Ok(CapturedOutput {
            code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    async fn stream(&self, spec: &CommandSpec) -> Result<()> {
        if self.echo {
            eprintln!("{}", style(format!("$ {spec}")).dim());
        }
        debug!(command = %spec, "streaming");

        let status = Self::build(spec)
            .status()
            .await
            .map_err(|e| Self::map_spawn_error(spec, e))?;

        if status.success() {
            Ok(())
        } else {
            // Stderr already went to the terminal; the error only carries
            // the exit code forward.
            Err(ToolError::command_failed(
                spec.to_string(),
                status.code().unwrap_or(1),
                "",
            ))
        }
    }
}
