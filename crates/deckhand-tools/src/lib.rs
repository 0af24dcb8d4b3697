//! Deckhand Tools - external tool plumbing for the deckhand CLI
//!
//! This crate provides everything deckhand needs to delegate work to the
//! four command-line tools the demo environment is built on:
//! - **Command plumbing**: `CommandSpec` descriptions, the `CommandRunner`
//!   trait, a real `ProcessRunner` and a scripted `MockRunner` for tests
//! - **Tool clients**: typed wrappers for `docker`, `kind`, `kubectl` and
//!   `helm`, each exposing exactly the operations deckhand performs
//! - **Environment**: the per-invocation description of the demo
//!   environment (cluster name, image tag, directories, workload names)
//! - **Image discovery**: locating docker build contexts under `images/`
//!
//! Nothing here owns state: every query (image exists, cluster exists,
//! release exists) goes back to the external tool at the moment of use.

pub mod command;
pub mod docker;
pub mod env;
pub mod error;
pub mod helm;
pub mod images;
pub mod kind;
pub mod kubectl;
pub mod runner;

pub use command::{CapturedOutput, CommandSpec};
pub use docker::Docker;
pub use env::{Environment, GATEWAY_IMAGE, NODE_IMAGE};
pub use error::{Result, ToolError};
pub use helm::{Helm, HelmRelease};
pub use images::{ImageContext, discover_contexts, find_context};
pub use kind::Kind;
pub use kubectl::{Kubectl, LogOptions};
pub use runner::{CommandRunner, MockOutcome, MockRunner, ProcessRunner};
