//! Up command - provision the whole demo environment

use deckhand_tools::{CommandRunner, Environment};

use crate::commands::{build, cert_manager, cluster, deps, upload_images};
use crate::display;
use crate::error::Result;
use crate::toolbox::Toolbox;

/// Run the full provisioning chain, halting on the first failure.
///
/// Later steps assume the earlier ones: images must exist before they
/// can be loaded, and the cluster must exist before cert-manager can
/// go in. The order is fixed.
pub async fn run<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    deps::ensure(tools).await?;
    build::ensure(tools, env).await?;
    cluster::create(tools, env).await?;
    cert_manager::run(tools).await?;
    upload_images::run(tools, env).await?;
    display::success("environment is up");
    Ok(())
}
