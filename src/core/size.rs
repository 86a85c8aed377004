use crate::models::EntryKind;

/// Column width of the size field that starts every rendered line.
pub const SIZE_FIELD_WIDTH: usize = 10;

const DIR_TOKEN: &str = "<DIR>";
const LINK_TOKEN: &str = "<LINK>";
const OTHER_TOKEN: &str = "<OTHER>";
const ERROR_TOKEN: &str = "ERROR";

const KB: u64 = 1_000;
const MB: u64 = 1_000_000;
const GB: u64 = 1_000_000_000;

/// Largest GB figure that still fits the field next to its suffix.
const MAX_GB_DISPLAY: u64 = 99_999_999;

/// What the size column knows about an entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SizeReading {
    Directory,
    Bytes(u64),
    Link,
    Special,
    Unavailable,
}

impl SizeReading {
    /// Builds a reading from an entry kind and, for regular files, the
    /// outcome of the size query.
    pub fn new<E>(kind: EntryKind, size: Option<Result<u64, E>>) -> Self {
        match (kind, size) {
            (EntryKind::Directory, _) => SizeReading::Directory,
            (EntryKind::File, Some(Ok(bytes))) => SizeReading::Bytes(bytes),
            (EntryKind::File, _) => SizeReading::Unavailable,
            (EntryKind::Symlink, _) => SizeReading::Link,
            (EntryKind::Other, _) => SizeReading::Special,
            (EntryKind::Unknown, _) => SizeReading::Unavailable,
        }
    }
}

/// Renders the fixed-width size column.
///
/// Units step up only once the value in the larger unit reaches 10, so a
/// 5 GB file reads `5000MB`. Values are truncated, never rounded.
pub fn format_size_field(reading: SizeReading) -> String {
    let token = match reading {
        SizeReading::Directory => DIR_TOKEN.to_owned(),
        SizeReading::Bytes(bytes) => human_size(bytes),
        SizeReading::Link => LINK_TOKEN.to_owned(),
        SizeReading::Special => OTHER_TOKEN.to_owned(),
        SizeReading::Unavailable => ERROR_TOKEN.to_owned(),
    };
    format!("{token:<SIZE_FIELD_WIDTH$}")
}

fn human_size(bytes: u64) -> String {
    if bytes >= 10 * GB {
        format!("{}GB", (bytes / GB).min(MAX_GB_DISPLAY))
    } else if bytes >= 10 * MB {
        format!("{}MB", bytes / MB)
    } else if bytes >= 10 * KB {
        format!("{}KB", bytes / KB)
    } else {
        format!("{bytes}B")
    }
}
