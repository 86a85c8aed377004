pub mod cli;
pub mod core;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;

use std::path::{Path, PathBuf};

use anyhow::Context;

/// Absolute form of the requested root, or of the working directory when no
/// path was given. Resolving once up front keeps the walk independent of
/// later working-directory changes.
pub fn resolve_root(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match path {
        Some(path) => std::path::absolute(path)
            .with_context(|| format!("cannot resolve {}", path.display())),
        None => std::env::current_dir().context("cannot read current directory"),
    }
}

pub fn banner(root: &Path) -> String {
    format!("Current path: {}", root.display())
}
