mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::{MockFileSystem, entry};

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

use crate::models::{DirListing, EntryKind};

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Direct children of `dir`, in the order the platform enumerates them.
    async fn read_dir(&self, dir: &Path) -> Result<DirListing>;

    /// Byte length of the regular file at `path`, following symlinks.
    async fn file_size(&self, path: &Path) -> Result<u64>;

    /// Kind of whatever `path` finally points at, following symlinks.
    async fn resolve_kind(&self, path: &Path) -> Result<EntryKind>;
}
