use std::path::PathBuf;

use thiserror::Error;

/// A failure recovered during traversal. The affected entry or subtree is
/// marked in the output and the walk continues.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum TraversalError {
    #[error("cannot read size of {}: {}", path.display(), message)]
    SizeQuery { path: PathBuf, message: String },
    #[error("cannot list {}: {}", path.display(), message)]
    DirectoryEnumeration { path: PathBuf, message: String },
    /// An entry of the directory at `path` could not be read.
    #[error("cannot read an entry of {}: {}", path.display(), message)]
    EntryRead { path: PathBuf, message: String },
}

impl TraversalError {
    pub fn path(&self) -> &PathBuf {
        match self {
            TraversalError::SizeQuery { path, .. }
            | TraversalError::DirectoryEnumeration { path, .. }
            | TraversalError::EntryRead { path, .. } => path,
        }
    }
}
