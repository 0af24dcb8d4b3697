//! Image build-context discovery
//!
//! A build context is an immediate subdirectory of the images directory
//! containing a `Dockerfile`; the directory name is the image name.
//! Discovery is re-done on every invocation; the filesystem is the only
//! source of truth for which images the demo needs.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{Result, ToolError};

/// A docker build context discovered under the images directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageContext {
    /// Image name, taken from the directory name
    pub name: String,
    /// Path of the build context
    pub dir: PathBuf,
}

/// Discover all build contexts under `root`, sorted by name.
///
/// Subdirectories without a `Dockerfile` are ignored. A missing or
/// unreadable root is an error; an existing but empty one yields an
/// empty list.
pub fn discover_contexts(root: &Path) -> Result<Vec<ImageContext>> {
    let mut contexts = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if !entry.path().join("Dockerfile").is_file() {
            continue;
        }
        contexts.push(ImageContext {
            name: entry.file_name().to_string_lossy().to_string(),
            dir: entry.into_path(),
        });
    }

    debug!(root = %root.display(), count = contexts.len(), "discovered build contexts");
    Ok(contexts)
}

/// Find the build context with the given name under `root`.
pub fn find_context(root: &Path, name: &str) -> Result<ImageContext> {
    discover_contexts(root)?
        .into_iter()
        .find(|ctx| ctx.name == name)
        .ok_or_else(|| ToolError::UnknownImage {
            name: name.to_string(),
            dir: root.display().to_string(),
        })
}
