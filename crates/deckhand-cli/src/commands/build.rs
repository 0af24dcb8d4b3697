//! Image build commands - gateway and sample-app build contexts

use console::style;
use deckhand_tools::{
    CommandRunner, Environment, GATEWAY_IMAGE, ImageContext, NODE_IMAGE, discover_contexts,
    find_context,
};

use crate::display;
use crate::error::Result;
use crate::toolbox::Toolbox;

/// Build every context under the images directory.
pub async fn all<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    let contexts = discover_contexts(&env.images_dir)?;
    for context in &contexts {
        build_context(tools, env, context).await?;
    }
    display::success(format!("built {} image(s)", contexts.len()));
    Ok(())
}

/// Build the gateway (Envoy) image.
pub async fn gateway<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    named(tools, env, GATEWAY_IMAGE).await
}

/// Build the Node.js sample-app image.
pub async fn node<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    named(tools, env, NODE_IMAGE).await
}

/// Build whichever images are missing from the local docker daemon.
///
/// Images that already exist are left alone, so running this twice in
/// a row builds nothing the second time.
pub async fn ensure<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment) -> Result<()> {
    for context in discover_contexts(&env.images_dir)? {
        let reference = env.image_ref(&context.name);
        if tools.docker.image_exists(&reference).await? {
            display::skip(format!("image {} already present", style(&reference).cyan()));
        } else {
            build_context(tools, env, &context).await?;
        }
    }
    Ok(())
}

async fn named<R: CommandRunner>(tools: &Toolbox<R>, env: &Environment, name: &str) -> Result<()> {
    let context = find_context(&env.images_dir, name)?;
    build_context(tools, env, &context).await
}

async fn build_context<R: CommandRunner>(
    tools: &Toolbox<R>,
    env: &Environment,
    context: &ImageContext,
) -> Result<()> {
    let reference = env.image_ref(&context.name);
    display::step(format!("building {}", style(&reference).cyan()));
    tools.docker.build(&reference, &context.dir).await?;
    Ok(())
}
