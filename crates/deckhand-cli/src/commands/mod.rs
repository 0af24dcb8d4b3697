//! CLI commands

pub mod help;

// Environment lifecycle
pub mod cert_manager;
pub mod cluster;
pub mod up;

// Images
pub mod build;
pub mod upload_images;

// Workloads and diagnostics
pub mod diagnostics;
pub mod workloads;

// Tool checks
pub mod deps;
