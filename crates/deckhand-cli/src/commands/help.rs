//! Help command - categorized command overview
//!
//! Printed when `help` is asked for explicitly and when no subcommand
//! is given at all.

use console::style;

/// Display order and grouping for the overview. Every subcommand the
/// parser accepts must appear here exactly once.
const CATEGORIES: &[(&str, &[(&str, &str)])] = &[
    (
        "Environment",
        &[
            ("up", "check tools, build images, create the cluster and provision it"),
            ("down", "delete the kind cluster"),
            ("cluster", "create the kind cluster if it does not exist yet"),
            ("cert-manager", "install cert-manager into the cluster"),
        ],
    ),
    (
        "Images",
        &[
            ("build", "build the gateway (Envoy) image"),
            ("build-node", "build the Node.js sample-app image"),
            ("build-images", "build every image under the images directory"),
            ("ensure-images", "build any image missing from the local docker daemon"),
            ("upload-images", "load the locally built images into the kind cluster"),
        ],
    ),
    (
        "Workloads",
        &[
            ("simple", "deploy the simple demo workload"),
            ("artillery", "run the artillery load-test job"),
            ("datadog", "install the datadog agent (requires DD_API_KEY)"),
        ],
    ),
    (
        "Diagnostics",
        &[
            ("describe", "describe every pod in every namespace"),
            ("exec", "run a command inside the gateway proxy pod"),
            ("restart", "restart the gateway deployments"),
            ("init-logs", "show logs from the proxy init container"),
            ("gateway-proxy", "forward a local port to the gateway proxy"),
            ("gateway-logs", "follow the gateway proxy logs"),
            ("operator-logs", "follow the gateway operator logs"),
        ],
    ),
    (
        "Dependencies",
        &[
            ("ensure-deps", "check that every required tool is installed"),
            ("docker", "check that docker is installed and the daemon is reachable"),
            ("kubectl", "check that kubectl is installed"),
            ("kind", "check that kind is installed"),
            ("helm", "check that helm is installed"),
        ],
    ),
    ("General", &[("help", "show this overview")]),
];

/// Print the categorized overview.
pub fn run() {
    println!(
        "{}",
        style("deckhand - build automation for the local gateway demo environment").bold()
    );
    println!();
    println!("Usage: deckhand <command> [options]");

    for (category, commands) in CATEGORIES {
        println!();
        println!("{}", style(category).cyan().bold());
        for (name, about) in *commands {
            println!("  {} {}", style(format!("{name:<14}")).green(), about);
        }
    }
    println!();
}
