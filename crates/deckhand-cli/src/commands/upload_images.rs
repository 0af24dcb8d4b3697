//! Upload command - sideload local images into the kind cluster

use console::style;
use deckhand_tools::{CommandRunner, Environment, discover_contexts};

use crate::display;
use crate::error::Result;
use crate::toolbox::Toolbox;

/// Load every locally built image into the cluster's nodes.
pub async fn run<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let contexts = discover_contexts(&env.images_dir)?;
    for context in &contexts {
        let reference = env.image_ref(&context.name);
        display::step(format!(
            "loading {} into {}",
            style(&reference).cyan(),
            style(&env.cluster_name).cyan()
        ));
        tools.kind.load_image(&env.cluster_name, &reference).await?;
    }
    display::success(format!("loaded {} image(s)", contexts.len()));
    Ok(())
}
