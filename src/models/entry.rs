use std::path::PathBuf;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Symlink,
    /// Sockets, FIFOs, device nodes.
    Other,
    /// The entry type could not be read.
    Unknown,
}

impl EntryKind {
    pub fn is_special(self) -> bool {
        !matches!(self, EntryKind::Directory | EntryKind::File)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

/// Result of enumerating one directory. Entries the platform failed to
/// yield are reported in `unreadable` instead of being dropped.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DirListing {
    pub entries: Vec<FsEntry>,
    pub unreadable: Vec<String>,
}
