use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{DirListing, EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response<T> {
    Ok(T),
    Err(String),
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<PathBuf, Response<DirListing>>,
    sizes: HashMap<PathBuf, Response<u64>>,
    link_targets: HashMap<PathBuf, EntryKind>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.listings.insert(
            dir.into(),
            Response::Ok(DirListing {
                entries,
                unreadable: Vec::new(),
            }),
        );
    }

    /// Adds an entry the platform failed to yield to an already scripted listing.
    pub fn add_unreadable_entry(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let dir: PathBuf = dir.into();
        let mut inner = self.inner.lock().expect("mock fs lock");
        if let Some(Response::Ok(listing)) = inner.listings.get_mut(&dir) {
            listing.unreadable.push(message.into());
        }
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .listings
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_size(&self, file: impl Into<PathBuf>, bytes: u64) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.sizes.insert(file.into(), Response::Ok(bytes));
    }

    pub fn set_size_error(&self, file: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.sizes.insert(file.into(), Response::Err(message.into()));
    }

    /// Kind a symlink resolves to. Links without a target are dangling.
    pub fn set_link_target(&self, link: impl Into<PathBuf>, kind: EntryKind) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.link_targets.insert(link.into(), kind);
    }

    /// Directories listed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

pub fn entry(parent: &str, name: &str, kind: EntryKind) -> FsEntry {
    FsEntry {
        path: Path::new(parent).join(name),
        name: name.to_owned(),
        kind,
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<DirListing> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.listings.get(dir) {
            Some(Response::Ok(listing)) => Ok(listing.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }

    async fn file_size(&self, path: &Path) -> Result<u64> {
        let inner = self.inner.lock().expect("mock fs lock");
        match inner.sizes.get(path) {
            Some(Response::Ok(bytes)) => Ok(*bytes),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            None => Ok(0),
        }
    }

    async fn resolve_kind(&self, path: &Path) -> Result<EntryKind> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner
            .link_targets
            .get(path)
            .copied()
            .ok_or_else(|| anyhow!("No such file or directory"))
    }
}
