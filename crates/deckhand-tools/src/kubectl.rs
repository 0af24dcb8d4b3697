//! kubectl client - manifests, logs, and in-cluster diagnostics

use std::path::Path;

use crate::command::CommandSpec;
use crate::error::{Result, ToolError};
use crate::runner::CommandRunner;

const PROGRAM: &str = "kubectl";

/// Options for a `kubectl logs` invocation.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub follow: bool,
    pub container: Option<String>,
    pub namespace: Option<String>,
}

impl LogOptions {
    pub fn follow(mut self) -> Self {
        self.follow = true;
        self
    }

    pub fn container(mut self, name: impl Into<String>) -> Self {
        self.container = Some(name.into());
        self
    }

    pub fn namespace(mut self, name: impl Into<String>) -> Self {
        self.namespace = Some(name.into());
        self
    }
}

/// Typed wrapper around the `kubectl` CLI.
#[derive(Debug, Clone)]
pub struct Kubectl<R> {
    runner: R,
}

impl<R: CommandRunner> Kubectl<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Check that kubectl is installed. Client-side only: a reachable
    /// cluster is not required just to have the tool.
    pub async fn probe(&self) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["version", "--client=true"]);
        match self.runner.capture(&spec).await {
            Ok(out) if out.success() => Ok(()),
            Ok(_) => Err(ToolError::missing(PROGRAM)),
            Err(e) => Err(e),
        }
    }

    /// Apply a manifest file to the current context.
    pub async fn apply(&self, manifest: &Path) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["apply", "-f"])
            .arg(manifest.display().to_string());
        self.runner.stream(&spec).await
    }

    /// Describe every pod in every namespace.
    pub async fn describe_pods(&self) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM).args(["describe", "pods", "--all-namespaces"]);
        self.runner.stream(&spec).await
    }

    /// Run a command inside the first pod of a workload, interactively.
    pub async fn exec(&self, target: &str, command: &[String]) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["exec", "-it", target, "--"])
            .args(command.iter().cloned());
        self.runner.stream(&spec).await
    }

    /// Stream or dump logs for a workload.
    pub async fn logs(&self, target: &str, opts: &LogOptions) -> Result<()> {
        let mut spec = CommandSpec::new(PROGRAM).arg("logs").arg(target);
        if let Some(container) = opts.container.as_deref() {
            spec = spec.args(["-c", container]);
        }
        if let Some(namespace) = opts.namespace.as_deref() {
            spec = spec.args(["-n", namespace]);
        }
        if opts.follow {
            spec = spec.arg("-f");
        }
        self.runner.stream(&spec).await
    }

    /// Trigger a rolling restart of a workload.
    pub async fn rollout_restart(&self, target: &str, namespace: Option<&str>) -> Result<()> {
        let mut spec = CommandSpec::new(PROGRAM).args(["rollout", "restart", target]);
        if let Some(namespace) = namespace {
            spec = spec.args(["-n", namespace]);
        }
        self.runner.stream(&spec).await
    }

    /// Forward a local port to a workload port until interrupted.
    pub async fn port_forward(&self, target: &str, local: u16, remote: u16) -> Result<()> {
        let spec = CommandSpec::new(PROGRAM)
            .args(["port-forward", target])
            .arg(format!("{local}:{remote}"));
        self.runner.stream(&spec).await
    }
}
