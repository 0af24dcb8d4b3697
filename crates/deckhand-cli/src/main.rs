//! Deckhand CLI - build automation for the local gateway demo environment

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use deckhand_tools::{Environment, ProcessRunner};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;
mod error;
mod exit_codes;
mod toolbox;

use error::CliError;
use toolbox::Toolbox;

#[derive(Parser)]
#[command(name = "deckhand")]
#[command(author = "Deckhand Contributors")]
#[command(version)]
#[command(about = "Build automation for the local gateway demo environment", long_about = None)]
#[command(propagate_version = true)]
#[command(disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Name of the kind cluster
    #[arg(long, global = true, env = "DECKHAND_CLUSTER", default_value = "gateway-demo")]
    cluster: String,

    /// Tag applied to locally built images
    #[arg(long, global = true, env = "DECKHAND_TAG", default_value = "dev")]
    tag: String,

    /// Directory holding one docker build context per image
    #[arg(long, global = true, env = "DECKHAND_IMAGES_DIR", default_value = "images")]
    images_dir: PathBuf,

    /// Directory holding the deployment manifests
    #[arg(long, global = true, default_value = "deploy")]
    deploy_dir: PathBuf,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the categorized command overview
    Help,

    /// Check every required tool, then build, create and provision
    Up,

    /// Delete the kind cluster
    Down,

    /// Create the kind cluster if it does not exist yet
    Cluster,

    /// Install cert-manager into the cluster
    CertManager,

    /// Build every image under the images directory
    BuildImages,

    /// Build any image missing from the local docker daemon
    EnsureImages,

    /// Build the gateway (Envoy) image
    Build,

    /// Build the Node.js sample-app image
    BuildNode,

    /// Load the locally built images into the kind cluster
    UploadImages,

    /// Deploy the simple demo workload
    Simple,

    /// Run the artillery load-test job
    Artillery,

    /// Install the datadog agent (requires DD_API_KEY)
    Datadog,

    /// Describe every pod in every namespace
    Describe,

    /// Run a command inside the gateway proxy pod
    Exec {
        /// Command to run (defaults to an interactive shell)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Restart the gateway deployments
    Restart,

    /// Show logs from the proxy init container
    InitLogs,

    /// Follow the gateway proxy logs
    GatewayLogs,

    /// Follow the gateway operator logs
    OperatorLogs,

    /// Forward a local port to the gateway proxy
    GatewayProxy {
        /// Local port to bind
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },

    /// Check that every required tool is installed
    EnsureDeps,

    /// Check that docker is installed and the daemon is reachable
    Docker,

    /// Check that kubectl is installed
    Kubectl,

    /// Check that kind is installed
    Kind,

    /// Check that helm is installed
    Helm,
}

impl Cli {
    fn environment(&self) -> Environment {
        Environment {
            cluster_name: self.cluster.clone(),
            image_tag: self.tag.clone(),
            images_dir: self.images_dir.clone(),
            deploy_dir: self.deploy_dir.clone(),
            ..Environment::default()
        }
    }
}

fn init_tracing(debug: bool) {
    let default = if debug { "deckhand=debug,deckhand_tools=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    init_tracing(cli.debug);

    if cli.debug {
        // SAFETY: We're the only thread at this point (start of main)
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    if let Err(err) = dispatch(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

async fn dispatch(cli: Cli) -> Result<(), CliError> {
    let env = cli.environment();
    let tools = Toolbox::new(ProcessRunner::new());

    debug!(
        "cluster {}, images under {}, manifests under {}",
        env.cluster_name,
        env.images_dir.display(),
        env.deploy_dir.display()
    );

    match cli.command {
        None | Some(Commands::Help) => {
            commands::help::run();
            Ok(())
        }

        Some(Commands::Up) => commands::up::run(&tools, &env).await,
        Some(Commands::Down) => commands::cluster::down(&tools, &env).await,
        Some(Commands::Cluster) => commands::cluster::create(&tools, &env).await,
        Some(Commands::CertManager) => commands::cert_manager::run(&tools).await,

        Some(Commands::BuildImages) => commands::build::all(&tools, &env).await,
        Some(Commands::EnsureImages) => commands::build::ensure(&tools, &env).await,
        Some(Commands::Build) => commands::build::gateway(&tools, &env).await,
        Some(Commands::BuildNode) => commands::build::node(&tools, &env).await,
        Some(Commands::UploadImages) => commands::upload_images::run(&tools, &env).await,

        Some(Commands::Simple) => commands::workloads::simple(&tools, &env).await,
        Some(Commands::Artillery) => commands::workloads::artillery(&tools, &env).await,
        Some(Commands::Datadog) => commands::workloads::datadog(&tools).await,

        Some(Commands::Describe) => commands::diagnostics::describe(&tools).await,
        Some(Commands::Exec { command }) => commands::diagnostics::exec(&tools, &env, &command).await,
        Some(Commands::Restart) => commands::diagnostics::restart(&tools, &env).await,
        Some(Commands::InitLogs) => commands::diagnostics::init_logs(&tools, &env).await,
        Some(Commands::GatewayLogs) => commands::diagnostics::gateway_logs(&tools, &env).await,
        Some(Commands::OperatorLogs) => commands::diagnostics::operator_logs(&tools, &env).await,
        Some(Commands::GatewayProxy { port }) => {
            commands::diagnostics::proxy(&tools, &env, port).await
        }

        Some(Commands::EnsureDeps) => commands::deps::ensure(&tools).await,
        Some(Commands::Docker) => commands::deps::docker(&tools).await,
        Some(Commands::Kubectl) => commands::deps::kubectl(&tools).await,
        Some(Commands::Kind) => commands::deps::kind(&tools).await,
        Some(Commands::Helm) => commands::deps::helm(&tools).await,
    }
}
