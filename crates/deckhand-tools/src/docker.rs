//! docker client - image builds and local image existence

use std::path::Path;

use crate::command::CommandSpec;
use crate::error::{Result, ToolError};
use crate::runner::CommandRunner;

const PROGRAM: &str = "docker";

/// Typed wrapper around the `docker` CLI
#[derive(Debug, Clone)]
pub struct Docker<R> {
    runner: R,
}

impl<R: CommandRunner> Docker<R> {
    /// Create a client over the given runner.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Check that docker is installed and the daemon answers.
    ///
    /// Quiet on success. A present binary with an unreachable daemon
    /// counts as missing: nothing else here works without the daemon.
    pub async fn probe(&self) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["version", "--format", "{{.Server.Version}}"]);
        match self.runner.capture(&spec).await {
            Ok(out) if out.success() => Ok(()),
            Ok(_) => Err(ToolError::missing(PROGRAM)),
            Err(e) => Err(e),
        }
    }

    /// True when an image with this reference exists locally.
    pub async fn image_exists(&self, reference: &str) -> Result<bool> {
        let spec = CommandSpec::new(PROGRAM).args(["image", "inspect", reference]);
        Ok(self.runner.capture(&spec).await?.success())
    }

    /// Build `context` into an image tagged `reference`.
    pub async fn build(&self, reference: &str, context: &Path) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["build", "-t", reference])
            .arg(context.display().to_string());
        self.runner.stream(&spec).await
    }
}
