use anyhow::Result;
use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;

use crate::models::{DirListing, EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<DirListing> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut listing = DirListing::default();
            for entry in std::fs::read_dir(&dir)? {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        listing.unreadable.push(err.to_string());
                        continue;
                    }
                };
                let kind = entry
                    .file_type()
                    .map(classify)
                    .unwrap_or(EntryKind::Unknown);

                listing.entries.push(FsEntry {
                    path: entry.path(),
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(listing)
        })
        .await?
    }

    async fn file_size(&self, path: &Path) -> Result<u64> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(metadata.len())
    }

    async fn resolve_kind(&self, path: &Path) -> Result<EntryKind> {
        let metadata = tokio::fs::metadata(path).await?;
        Ok(classify(metadata.file_type()))
    }
}

fn classify(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
