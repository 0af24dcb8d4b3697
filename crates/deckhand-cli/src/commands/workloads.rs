//! Workload commands - sample deployment, load test, monitoring

use console::style;
use deckhand_tools::{CommandRunner, Environment};

use crate::display;
use crate::error::{CliError, Result};
use crate::toolbox::Toolbox;

const DATADOG_RELEASE: &str = "datadog-agent";
const DATADOG_NAMESPACE: &str = "datadog";
const DATADOG_REPO: &str = "datadog";
const DATADOG_REPO_URL: &str = "https://helm.datadoghq.com";
const DATADOG_CHART: &str = "datadog/datadog";

/// Deploy the simple demo workload.
pub async fn simple<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let manifest = env.manifest("simple.yaml");
    display::step(format!("applying {}", style(manifest.display()).cyan()));
    tools.kubectl.apply(&manifest).await?;
    display::success("simple demo deployed");
    Ok(())
}

/// Run the artillery load-test job against the gateway.
pub async fn artillery<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let manifest = env.manifest("artillery.yaml");
    display::step(format!("applying {}", style(manifest.display()).cyan()));
    tools.kubectl.apply(&manifest).await?;
    display::success("artillery job started");
    Ok(())
}

/// Install the datadog agent.
///
/// Always an upgrade-install: rerunning picks up a rotated API key.
pub async fn datadog<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    let api_key = std::env::var("DD_API_KEY").map_err(|_| {
        CliError::input_with_help(
            "DD_API_KEY is not set",
            "export DD_API_KEY=<your datadog api key> and run again",
        )
    })?;

    display::step(format!(
        "adding chart repository {}",
        style(DATADOG_REPO).cyan()
    ));
    tools.helm.repo_add(DATADOG_REPO, DATADOG_REPO_URL).await?;

    display::step(format!("installing {}", style(DATADOG_RELEASE).cyan()));
    let api_key_value = format!("datadog.apiKey={api_key}");
    tools
        .helm
        .upgrade_install(
            DATADOG_RELEASE,
            DATADOG_CHART,
            DATADOG_NAMESPACE,
            &["--set", &api_key_value],
        )
        .await?;

    display::success("datadog agent installed");
    Ok(())
}
