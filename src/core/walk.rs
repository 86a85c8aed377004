use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::{debug, warn};

use super::ignore::IgnoreSet;
use super::render::{Charset, DepthState, write_line};
use super::size::{SizeReading, format_size_field};
use crate::error::TraversalError;
use crate::fs::FileSystem;
use crate::models::{DirListing, EntryKind, FsEntry};

/// Configuration options for rendering a tree.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Deepest level whose directories are descended into (None means unlimited).
    /// Root children sit at depth 0, so `Some(0)` lists only the root's entries.
    pub max_depth: Option<usize>,
    /// Pipe-separated names or globs to leave out (e.g. "target|*.log")
    pub ignore_pattern: Option<String>,
    /// Glyphs used for the indentation columns
    pub charset: Charset,
    /// Follow symlinks and omit whatever is then neither a regular file nor
    /// a directory (dangling links, sockets, devices)
    pub skip_special: bool,
}

impl RenderOptions {
    fn descends_from(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

/// Counts of what a render emitted, plus every failure it recovered from.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
    pub others: usize,
    pub errors: Vec<TraversalError>,
}

/// One open directory on the work stack.
struct Frame {
    entries: std::vec::IntoIter<FsEntry>,
    state: DepthState,
}

/// Streams the tree under `root` into `out`, one line per entry, depth first
/// in enumeration order.
///
/// Failing to list `root` itself is an error. Anything that fails below it is
/// marked on the affected line, logged and collected in the summary.
pub async fn render_tree<F: FileSystem, W: Write>(
    fs: &F,
    root: &Path,
    options: &RenderOptions,
    out: &mut W,
) -> anyhow::Result<RenderSummary> {
    let ignore = options
        .ignore_pattern
        .as_deref()
        .map(IgnoreSet::parse)
        .transpose()?;

    debug!(path = %root.display(), "listing root");
    let root_listing = fs
        .read_dir(root)
        .await
        .with_context(|| format!("cannot list {}", root.display()))?;

    let mut summary = RenderSummary::default();
    let mut stack = vec![Frame {
        entries: open_listing(root, root_listing, ignore.as_ref(), &mut summary),
        state: DepthState::default(),
    }];

    while let Some(frame) = stack.last_mut() {
        let Some(entry) = frame.entries.next() else {
            stack.pop();
            continue;
        };
        let is_last = frame.entries.len() == 0;

        // Without markers for special entries, links stand in for their targets.
        let kind = match entry.kind {
            EntryKind::Symlink | EntryKind::Unknown if options.skip_special => fs
                .resolve_kind(&entry.path)
                .await
                .unwrap_or(EntryKind::Unknown),
            kind => kind,
        };
        if options.skip_special && kind.is_special() {
            continue;
        }

        let depth = frame.state.depth();
        let prefix = frame.state.prefix(is_last, options.charset);
        let child_state = (kind == EntryKind::Directory && options.descends_from(depth))
            .then(|| frame.state.descend(is_last));

        let size = match kind {
            EntryKind::File => Some(fs.file_size(&entry.path).await),
            _ => None,
        };
        if let Some(Err(err)) = &size {
            warn!(path = %entry.path.display(), error = %err, "size query failed");
            summary.errors.push(TraversalError::SizeQuery {
                path: entry.path.clone(),
                message: err.to_string(),
            });
        }
        let size_field = format_size_field(SizeReading::new(kind, size));

        match kind {
            EntryKind::Directory => summary.directories += 1,
            EntryKind::File => summary.files += 1,
            _ => summary.others += 1,
        }

        let Some(child_state) = child_state else {
            write_line(out, &size_field, &prefix, &entry.name)?;
            continue;
        };

        debug!(path = %entry.path.display(), depth = depth + 1, "listing directory");
        match fs.read_dir(&entry.path).await {
            Ok(children) => {
                write_line(out, &size_field, &prefix, &entry.name)?;
                stack.push(Frame {
                    entries: open_listing(&entry.path, children, ignore.as_ref(), &mut summary),
                    state: child_state,
                });
            }
            Err(err) => {
                warn!(path = %entry.path.display(), error = %err, "cannot list directory");
                let label = format!("{} [error: {err}]", entry.name);
                write_line(out, &size_field, &prefix, &label)?;
                summary.errors.push(TraversalError::DirectoryEnumeration {
                    path: entry.path,
                    message: err.to_string(),
                });
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Records the entries the platform failed to yield and drops ignored names.
fn open_listing(
    dir: &Path,
    listing: DirListing,
    ignore: Option<&IgnoreSet>,
    summary: &mut RenderSummary,
) -> std::vec::IntoIter<FsEntry> {
    for message in listing.unreadable {
        warn!(dir = %dir.display(), error = %message, "skipping unreadable directory entry");
        summary.errors.push(TraversalError::EntryRead {
            path: dir.to_path_buf(),
            message,
        });
    }
    retain_visible(listing.entries, ignore).into_iter()
}

fn retain_visible(entries: Vec<FsEntry>, ignore: Option<&IgnoreSet>) -> Vec<FsEntry> {
    match ignore {
        Some(ignore) => entries
            .into_iter()
            .filter(|entry| !ignore.matches(&entry.name))
            .collect(),
        None => entries,
    }
}
