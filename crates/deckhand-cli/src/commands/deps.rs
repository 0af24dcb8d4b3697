//! Dependency commands - verify the external tools are installed
//!
//! Each check is quiet on success and fails with a message naming the
//! missing tool, so scripts can probe before doing real work.

use deckhand_tools::CommandRunner;

use crate::error::Result;
use crate::toolbox::Toolbox;

/// Check every required tool, in the order later steps need them.
pub async fn ensure<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    docker(tools).await?;
    kubectl(tools).await?;
    kind(tools).await?;
    helm(tools).await?;
    Ok(())
}

/// Check that docker is installed and the daemon is reachable.
pub async fn docker<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    tools.docker.probe().await?;
    Ok(())
}

/// Check that kubectl is installed.
pub async fn kubectl<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    tools.kubectl.probe().await?;
    Ok(())
}

/// Check that kind is installed.
pub async fn kind<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    tools.kind.probe().await?;
    Ok(())
}

/// Check that helm is installed.
pub async fn helm<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    tools.helm.probe().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_tools::MockRunner;

    #[tokio::test]
    async fn ensure_probes_every_tool_in_order() {
        let mock = MockRunner::new();

        ensure(&Toolbox::new(mock.clone())).await.unwrap();

        let at = |prefix: &[&str]| mock.position(prefix).unwrap();
        assert!(at(&["docker", "version"]) < at(&["kubectl", "version"]));
        assert!(at(&["kubectl", "version"]) < at(&["kind", "version"]));
        assert!(at(&["kind", "version"]) < at(&["helm", "version"]));
        assert_eq!(mock.invocations().len(), 4);
    }

    #[tokio::test]
    async fn ensure_stops_at_the_first_missing_tool() {
        let mock = MockRunner::new();
        mock.missing("kubectl");

        let err = ensure(&Toolbox::new(mock.clone())).await.unwrap_err();

        assert!(err.to_string().contains("kubectl"));
        assert_eq!(mock.count(&["kind", "version"]), 0);
        assert_eq!(mock.count(&["helm", "version"]), 0);
    }

    #[tokio::test]
    async fn each_check_names_its_own_tool() {
        for tool in ["docker", "kubectl", "kind", "helm"] {
            let mock = MockRunner::new();
            mock.missing(tool);
            let tools = Toolbox::new(mock);

            let err = match tool {
                "docker" => docker(&tools).await.unwrap_err(),
                "kubectl" => kubectl(&tools).await.unwrap_err(),
                "kind" => kind(&tools).await.unwrap_err(),
                _ => helm(&tools).await.unwrap_err(),
            };
            assert!(err.to_string().contains(tool));
            assert_eq!(err.exit_code(), 1);
        }
    }

    // The helm check must probe helm itself, not a neighboring tool.
    #[tokio::test]
    async fn helm_check_does_not_touch_kind() {
        let mock = MockRunner::new();
        mock.missing("kind");

        helm(&Toolbox::new(mock.clone())).await.unwrap();

        assert_eq!(mock.count(&["kind", "version"]), 0);
        assert_eq!(mock.count(&["helm", "version"]), 1);
    }
}
