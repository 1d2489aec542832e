//! Scanner for nginx-style config trees: flags `.conf` files that declare a
//! `location` without a trailing slash while also using an `alias` directive
//! (a classic path-traversal misconfiguration).
//!
//! Independent of the download core; shares no state with it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension considered a config file during the walk.
const CONF_SUFFIX: &str = ".conf";

/// Returns true when `content` has a `location` whose path does not end
/// with `/` and the file declares an `alias …` directive anywhere.
///
/// Lines are matched trimmed, the path is the location line minus a trailing
/// `{`. The two directives do not have to be in the same block.
pub fn has_alias_without_trailing_slash(content: &str) -> bool {
    let mut unslashed_location = false;
    let mut has_alias = false;
    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("location ") {
            let path = rest.trim_end_matches('{').trim_end();
            if !path.ends_with('/') {
                unslashed_location = true;
            }
        } else if line.starts_with("alias ") {
            has_alias = true;
        }
        if unslashed_location && has_alias {
            return true;
        }
    }
    false
}

/// Walks `root` and returns every `.conf` file flagged by
/// [`has_alias_without_trailing_slash`], in walk order.
///
/// Any traversal or read error aborts the scan; this is a one-shot audit
/// tool, not a best-effort crawler.
pub fn scan_tree(root: &Path) -> Result<Vec<PathBuf>> {
    let mut flagged = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(CONF_SUFFIX) {
            continue;
        }
        let path = entry.into_path();
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        if has_alias_without_trailing_slash(&content) {
            flagged.push(path);
        }
    }
    Ok(flagged)
}
