//! helm client - chart repos and release management

use serde::Deserialize;

use crate::command::CommandSpec;
use crate::error::{Result, ToolError};
use crate::runner::CommandRunner;

const PROGRAM: &str = "helm";

/// One row of `helm list --output json`.
///
/// Helm emits more fields (revision, updated, app_version); only the
/// ones we act on are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct HelmRelease {
    pub name: String,
    pub namespace: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub chart: String,
}

/// Typed wrapper around the `helm` CLI.
#[derive(Debug, Clone)]
pub struct Helm<R> {
    runner: R,
}

impl<R: CommandRunner> Helm<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Check that helm is installed. Quiet on success.
    pub async fn probe(&self) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["version", "--short"]);
        match self.runner.capture(&spec).await {
            Ok(out) if out.success() => Ok(()),
            Ok(_) => Err(ToolError::missing(PROGRAM)),
            Err(e) => Err(e),
        }
    }

    /// Releases installed in a namespace.
    pub async fn list(&self, namespace: &str) -> Result<Vec<HelmRelease>> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["list", "--namespace", namespace, "--output", "json"]);
        let out = self.runner.capture(&spec).await?.checked(&spec)?;
        serde_json::from_str(&out.stdout).map_err(|e| ToolError::UnexpectedOutput {
            tool: PROGRAM.to_string(),
            message: format!("release list is not valid JSON: {e}"),
        })
    }

    /// True when a release with this name exists in the namespace.
    pub async fn release_exists(&self, name: &str, namespace: &str) -> Result<bool> {
        Ok(self.list(namespace).await?.iter().any(|r| r.name == name))
    }

    /// Register (or refresh) a chart repository.
    pub async fn repo_add(&self, name: &str, url: &str) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["repo", "add", name, url, "--force-update"]);
        self.runner.stream(&spec).await
    }

    /// Install a chart, or upgrade it in place when already present.
    ///
    /// The namespace is created on demand. `extra` carries chart
    /// pins and `--set` overrides.
    pub async fn upgrade_install(
        &self,
        release: &str,
        chart: &str,
        namespace: &str,
        extra: &[&str],
    ) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["upgrade", "--install", release, chart])
            .args(["--namespace", namespace, "--create-namespace"])
            .args(extra.iter().copied());
        self.runner.stream(&spec).await
    }
}
