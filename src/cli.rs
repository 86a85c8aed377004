use clap::Parser;
use std::path::PathBuf;

use crate::core::{Charset, RenderOptions};

#[derive(Parser, Debug)]
#[command(name = "list-tree", version)]
#[command(about = "Print a directory tree with a size column for every entry", long_about = None)]
pub struct Cli {
    /// Root directory to print (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Deepest level to descend into; -1 means unlimited
    #[arg(
        short = 'L',
        long = "maxdepth",
        value_name = "DEPTH",
        default_value_t = -1,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i64).range(-1..)
    )]
    pub max_depth: i64,

    /// Names or globs to leave out, separated by '|' (e.g. "target|*.log")
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    pub ignore: Option<String>,

    /// Glyphs used to draw the tree
    #[arg(long, value_enum, default_value_t = Charset::Unicode)]
    pub charset: Charset,

    /// Follow symlinks and omit dangling links, sockets, devices and FIFOs
    #[arg(long)]
    pub skip_special: bool,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            max_depth: usize::try_from(self.max_depth).ok(),
            ignore_pattern: self.ignore.clone(),
            charset: self.charset,
            skip_special: self.skip_special,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn defaults_are_unbounded_unicode() {
        let cli = Cli::try_parse_from(["list-tree"]).unwrap();
        let options = cli.render_options();
        assert_eq!(cli.path, None);
        assert_eq!(options.max_depth, None);
        assert_eq!(options.charset, Charset::Unicode);
        assert!(!options.skip_special);
    }

    #[test]
    fn maxdepth_accepts_minus_one_and_non_negative() {
        let cli = Cli::try_parse_from(["list-tree", "--maxdepth", "-1"]).unwrap();
        assert_eq!(cli.render_options().max_depth, None);

        let cli = Cli::try_parse_from(["list-tree", "--maxdepth", "3", "--path", "/tmp"]).unwrap();
        assert_eq!(cli.render_options().max_depth, Some(3));
        assert_eq!(cli.path, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn maxdepth_without_value_is_a_usage_error() {
        let err = Cli::try_parse_from(["list-tree", "--maxdepth"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn maxdepth_below_minus_one_is_rejected() {
        let err = Cli::try_parse_from(["list-tree", "--maxdepth", "-2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);

        let err = Cli::try_parse_from(["list-tree", "--maxdepth", "deep"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn path_without_value_is_a_usage_error() {
        assert!(Cli::try_parse_from(["list-tree", "--path"]).is_err());
    }
}
