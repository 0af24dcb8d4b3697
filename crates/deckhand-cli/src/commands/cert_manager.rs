//! Cert-manager command - install cert-manager via helm

use console::style;
use deckhand_tools::CommandRunner;

use crate::display;
use crate::error::Result;
use crate::toolbox::Toolbox;

const RELEASE: &str = "cert-manager";
const NAMESPACE: &str = "cert-manager";
const REPO_NAME: &str = "jetstack";
const REPO_URL: &str = "https://charts.jetstack.io";
const CHART: &str = "jetstack/cert-manager";
const CHART_VERSION: &str = "v1.14.4";

/// Install cert-manager unless the release is already present.
pub async fn run<R: CommandRunner>(tools: &Toolbox<R>) -> Result<()> {
    if tools.helm.release_exists(RELEASE, NAMESPACE).await? {
        display::skip(format!(
            "release {} already installed",
            style(RELEASE).cyan()
        ));
        return Ok(());
    }

    display::step(format!("adding chart repository {}", style(REPO_NAME).cyan()));
    tools.helm.repo_add(REPO_NAME, REPO_URL).await?;

    display::step(format!(
        "installing {} {}",
        style(RELEASE).cyan(),
        style(CHART_VERSION).yellow()
    ));
    tools
        .helm
        .upgrade_install(
            RELEASE,
            CHART,
            NAMESPACE,
            &["--version", CHART_VERSION, "--set", "installCRDs=true"],
        )
        .await?;

    display::success("cert-manager is installed");
    Ok(())
}
