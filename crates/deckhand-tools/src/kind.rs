//! kind client - local cluster lifecycle and image sideloading

use crate::command::CommandSpec;
use crate::error::{Result, ToolError};
use crate::runner::CommandRunner;

const PROGRAM: &str = "kind";

/// Typed wrapper around the `kind` CLI.
#[derive(Debug, Clone)]
pub struct Kind<R> {
    runner: R,
}

impl<R: CommandRunner> Kind<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Check that kind is installed. Quiet on success.
    pub async fn probe(&self) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).arg("version");
        match self.runner.capture(&spec).await {
            Ok(out) if out.success() => Ok(()),
            Ok(_) => Err(ToolError::missing(PROGRAM)),
            Err(e) => Err(e),
        }
    }

    /// Names of clusters kind currently manages.
    pub async fn clusters(&self) -> Result<Vec<String>> {
        let spec = CommandSpec::new(PROGRAM).args(["get", "clusters"]);
        let out = self.runner.capture(&spec).await?.checked(&spec)?;
        // One name per line; "No kind clusters found." goes to stderr,
        // so stdout is empty when there are none.
        Ok(out
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }

    pub async fn cluster_exists(&self, name: &str) -> Result<bool> {
        Ok(self.clusters().await?.iter().any(|c| c == name))
    }

    /// Create a cluster, streaming kind's own progress output.
    pub async fn create_cluster(&self, name: &str) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["create", "cluster", "--name", name]);
        self.runner.stream(&spec).await
    }

    /// Delete a cluster. kind treats a missing cluster as success.
    pub async fn delete_cluster(&self, name: &str) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["delete", "cluster", "--name", name]);
        self.runner.stream(&spec).await
    }

    /// Sideload a local docker image into the cluster's nodes.
    pub async fn load_image(&self, cluster: &str, reference: &str) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["load", "docker-image", reference, "--name", cluster]);
        self.runner.stream(&spec).await
    }
}
