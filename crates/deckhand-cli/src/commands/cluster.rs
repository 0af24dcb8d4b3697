//! Cluster commands - create and tear down the local kind cluster

use console::style;
use deckhand_tools::{CommandRunner, Environment};

use crate::display;
use crate::error::Result;
use crate::toolbox::Toolbox;

/// Create the kind cluster unless it already exists.
pub async fn create<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    if tools.kind.cluster_exists(&env.cluster_name).await? {
        display::skip(format!(
            "cluster {} already exists",
            style(&env.cluster_name).cyan()
        ));
        return Ok(());
    }

    display::step(format!(
        "creating cluster {}",
        style(&env.cluster_name).cyan()
    ));
    tools.kind.create_cluster(&env.cluster_name).await?;
    display::success(format!("cluster {} is up", style(&env.cluster_name).cyan()));
    Ok(())
}

/// Delete the kind cluster.
///
/// No existence guard here: kind reports a missing cluster itself, and
/// its exit code passes through.
pub async fn down<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    display::step(format!(
        "deleting cluster {}",
        style(&env.cluster_name).cyan()
    ));
    tools.kind.delete_cluster(&env.cluster_name).await?;
    display::success(format!(
        "cluster {} is gone",
        style(&env.cluster_name).cyan()
    ));
    Ok(())
}
