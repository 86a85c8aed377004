use std::io::{self, Write};

use clap::ValueEnum;

/// Glyph set used to draw the tree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Charset {
    #[default]
    Unicode,
    Ascii,
}

struct Glyphs {
    vertical: &'static str,
    blank: &'static str,
    tee: &'static str,
    corner: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    vertical: "│   ",
    blank: "    ",
    tee: "├── ",
    corner: "└── ",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    vertical: "|   ",
    blank: "    ",
    tee: "|-- ",
    corner: "`-- ",
};

impl Charset {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            Charset::Unicode => &UNICODE_GLYPHS,
            Charset::Ascii => &ASCII_GLYPHS,
        }
    }
}

/// Last-sibling flags of every ancestor of the entries currently being
/// rendered, indexed by depth.
///
/// Each open directory owns its own state; descending produces an extended
/// copy, so a child never changes what its parent's remaining siblings see.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DepthState {
    last_at_depth: Vec<bool>,
}

impl DepthState {
    /// Depth of the entries rendered under this state (root children are 0).
    pub fn depth(&self) -> usize {
        self.last_at_depth.len()
    }

    /// State for the children of an entry at this depth.
    pub fn descend(&self, entry_is_last: bool) -> Self {
        let mut last_at_depth = Vec::with_capacity(self.last_at_depth.len() + 1);
        last_at_depth.extend_from_slice(&self.last_at_depth);
        last_at_depth.push(entry_is_last);
        Self { last_at_depth }
    }

    /// Indentation for an entry at this depth: one column per ancestor, then
    /// the entry's own branch glyph.
    pub fn prefix(&self, is_last: bool, charset: Charset) -> String {
        let glyphs = charset.glyphs();
        let mut prefix = String::with_capacity((self.depth() + 1) * glyphs.vertical.len());

        for &ancestor_is_last in &self.last_at_depth {
            prefix.push_str(if ancestor_is_last {
                glyphs.blank
            } else {
                glyphs.vertical
            });
        }

        prefix.push_str(if is_last { glyphs.corner } else { glyphs.tee });
        prefix
    }
}

/// Writes one rendered line: size field, indentation, then the label.
pub fn write_line<W: Write>(
    writer: &mut W,
    size_field: &str,
    prefix: &str,
    label: &str,
) -> io::Result<()> {
    writer.write_all(size_field.as_bytes())?;
    writer.write_all(prefix.as_bytes())?;
    writer.write_all(label.as_bytes())?;
    writer.write_all(b"\n")
}
