//! Diagnostic commands - logs, shells, restarts and port-forwards

use console::style;
use deckhand_tools::{CommandRunner, Environment, LogOptions};

use crate::display;
use crate::error::Result;
use crate::toolbox::Toolbox;

/// Describe every pod in every namespace.
pub async fn describe<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    tools.kubectl.describe_pods().await?;
    Ok(())
}

/// Run a command inside the gateway proxy pod.
///
/// With no command given this opens an interactive shell.
pub async fn exec<R: CommandRunner>(
    tools: &Toolbox<R>,
    env: &Environment,
    command: &[String],
) -> Result<()> {
    let shell = [String::from("sh")];
    let command = if command.is_empty() { &shell[..] } else { command };
    tools.kubectl.exec(&env.proxy_target(), command).await?;
    Ok(())
}

/// Restart the proxy, then the operator.
pub async fn restart<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    display::step(format!(
        "restarting {}",
        style(&env.proxy_deployment).cyan()
    ));
    tools.kubectl.rollout_restart(&env.proxy_target(), None).await?;

    display::step(format!(
        "restarting {}",
        style(&env.operator_deployment).cyan()
    ));
    tools
        .kubectl
        .rollout_restart(&env.operator_target(), Some(env.system_namespace.as_str()))
        .await?;
    Ok(())
}

/// Dump the proxy init container's logs.
pub async fn init_logs<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let opts = LogOptions::default().container(env.init_container.as_str());
    tools.kubectl.logs(&env.proxy_target(), &opts).await?;
    Ok(())
}

/// Follow the proxy logs until interrupted.
pub async fn gateway_logs<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let opts = LogOptions::default().follow();
    tools.kubectl.logs(&env.proxy_target(), &opts).await?;
    Ok(())
}

/// Follow the operator logs until interrupted.
pub async fn operator_logs<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let opts = LogOptions::default()
        .namespace(env.system_namespace.as_str())
        .follow();
    tools.kubectl.logs(&env.operator_target(), &opts).await?;
    Ok(())
}

/// Forward a local port to the proxy until interrupted.
pub async fn proxy<R: CommandRunner>(
    tools: &Toolbox<R>,
    env: &Environment,
    port: u16,
) -> Result<()> {
    display::step(format!(
        "forwarding {} to {} port {}",
        style(format!("localhost:{port}")).cyan(),
        style(env.proxy_target()).cyan(),
        env.proxy_port
    ));
    tools
        .kubectl
        .port_forward(&env.proxy_target(), port, env.proxy_port)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckhand_tools::MockRunner;

    #[tokio::test]
    async fn describe_covers_all_namespaces() {
        let mock = MockRunner::new();
        describe(&Toolbox::new(mock.clone())).await.unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl describe pods --all-namespaces"
        );
    }

    #[tokio::test]
    async fn exec_defaults_to_a_shell() {
        let mock = MockRunner::new();
        exec(&Toolbox::new(mock.clone()), &Environment::default(), &[])
            .await
            .unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl exec -it deploy/gateway-proxy -- sh"
        );
    }

    #[tokio::test]
    async fn exec_forwards_hyphenated_arguments() {
        let mock = MockRunner::new();
        let command: Vec<String> = ["curl", "-s", "localhost:8080"]
            .into_iter()
            .map(String::from)
            .collect();
        exec(&Toolbox::new(mock.clone()), &Environment::default(), &command)
            .await
            .unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl exec -it deploy/gateway-proxy -- curl -s localhost:8080"
        );
    }

    #[tokio::test]
    async fn restart_covers_proxy_then_operator() {
        let mock = MockRunner::new();
        restart(&Toolbox::new(mock.clone()), &Environment::default())
            .await
            .unwrap();

        let specs = mock.invocations();
        assert_eq!(
            specs[0].to_string(),
            "kubectl rollout restart deploy/gateway-proxy"
        );
        assert_eq!(
            specs[1].to_string(),
            "kubectl rollout restart deploy/gateway-operator -n gateway-system"
        );
    }

    #[tokio::test]
    async fn init_logs_pick_the_init_container() {
        let mock = MockRunner::new();
        init_logs(&Toolbox::new(mock.clone()), &Environment::default())
            .await
            .unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl logs deploy/gateway-proxy -c proxy-init"
        );
    }

    #[tokio::test]
    async fn gateway_logs_follow() {
        let mock = MockRunner::new();
        gateway_logs(&Toolbox::new(mock.clone()), &Environment::default())
            .await
            .unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl logs deploy/gateway-proxy -f"
        );
    }

    #[tokio::test]
    async fn operator_logs_follow_in_the_system_namespace() {
        let mock = MockRunner::new();
        operator_logs(&Toolbox::new(mock.clone()), &Environment::default())
            .await
            .unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl logs deploy/gateway-operator -n gateway-system -f"
        );
    }

    #[tokio::test]
    async fn proxy_forwards_the_requested_local_port() {
        let mock = MockRunner::new();
        proxy(&Toolbox::new(mock.clone()), &Environment::default(), 9090)
            .await
            .unwrap();
        assert_eq!(
            mock.invocations()[0].to_string(),
            "kubectl port-forward deploy/gateway-proxy 9090:8080"
        );
    }
}
