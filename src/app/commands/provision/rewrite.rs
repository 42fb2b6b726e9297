//! Literal substitution over allow-listed files of a working copy.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::domain::AppError;

/// Replace every occurrence of `old` with `new` in files whose path relative to `root`
/// exactly equals an `allow_list` entry. Returns the rewritten relative paths in walk order.
///
/// Relative paths are compared with `/` separators. Directory symlinks are not descended
/// into, but a symlink to a regular file counts as a file and is rewritten through the link.
/// Any read, write, decode or traversal failure is returned to the caller unchanged.
pub fn rewrite_files(
    root: &Path,
    allow_list: &[String],
    old: &str,
    new: &str,
) -> Result<Vec<String>, AppError> {
    let allowed: HashSet<&str> = allow_list.iter().map(String::as_str).collect();
    let mut rewritten = Vec::new();

    for entry in WalkDir::new(root).min_depth(1).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| AppError::WalkError(e.to_string()))?;
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let relative = relative_key(root, entry.path())?;
        if !allowed.contains(relative.as_str()) {
            continue;
        }

        let bytes = fs::read(entry.path())?;
        let content = String::from_utf8(bytes)
            .map_err(|_| AppError::DecodeError { path: entry.path().to_path_buf() })?;
        let updated = replace_literal(&content, old, new);
        if updated == content {
            debug!(file = %relative, "no occurrences to replace");
        }
        fs::write(entry.path(), updated)?;
        info!("Updated '{}'.", entry.path().display());
        rewritten.push(relative);
    }

    Ok(rewritten)
}

/// Literal, non-overlapping, left-to-right replacement. An empty `old` leaves the text as is.
pub fn replace_literal(content: &str, old: &str, new: &str) -> String {
    if old.is_empty() { content.to_string() } else { content.replace(old, new) }
}

fn relative_key(root: &Path, path: &Path) -> Result<String, AppError> {
    let relative = path.strip_prefix(root).map_err(|e| AppError::WalkError(e.to_string()))?;
    Ok(relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/"))
}
