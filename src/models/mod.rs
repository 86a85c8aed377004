mod entry;

pub use entry::{DirListing, EntryKind, FsEntry};
