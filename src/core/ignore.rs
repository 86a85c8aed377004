use std::collections::HashSet;

use anyhow::Context;
use regex::RegexSet;

/// Entry names excluded from the listing.
///
/// Built from a pipe-separated list such as `target|*.log|?.tmp`. Plain
/// names are compared exactly; segments with `*` or `?` are globs.
#[derive(Debug)]
pub struct IgnoreSet {
    names: HashSet<String>,
    globs: Option<RegexSet>,
}

impl IgnoreSet {
    pub fn parse(pattern: &str) -> anyhow::Result<Self> {
        let mut names = HashSet::new();
        let mut globs = Vec::new();

        for segment in pattern.split('|').map(str::trim) {
            if segment.is_empty() {
                continue;
            }
            if segment.contains(['*', '?']) {
                globs.push(glob_to_regex(segment));
            } else {
                names.insert(segment.to_owned());
            }
        }

        let globs = if globs.is_empty() {
            None
        } else {
            Some(
                RegexSet::new(&globs)
                    .with_context(|| format!("invalid ignore pattern: {pattern}"))?,
            )
        };

        Ok(Self { names, globs })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.names.contains(name)
            || self
                .globs
                .as_ref()
                .is_some_and(|globs| globs.is_match(name))
    }
}

fn glob_to_regex(glob: &str) -> String {
    let mut pattern = String::with_capacity(glob.len() * 2 + 2);
    pattern.push('^');
    for c in glob.chars() {
        match c {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            _ => pattern.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    pattern.push('$');
    pattern
}
