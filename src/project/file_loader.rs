//! Discovery of source files on disk.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::base::constants::{HEADER_EXTENSIONS, is_source_extension};
use crate::base::{Error, Result};

/// Get file extension from path
pub fn get_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Returns true if `path` has a SystemVerilog/Verilog source extension
pub fn is_source_file(path: &Path) -> bool {
    get_extension(path).is_some_and(is_source_extension)
}

/// Returns true for files that are normally pulled in through `` `include ``
pub fn is_header_file(path: &Path) -> bool {
    get_extension(path).is_some_and(|ext| HEADER_EXTENSIONS.contains(&ext))
}

/// Recursively collect every source file under `dir`, sorted by path.
///
/// Hidden directories (`.git`, ...) are not entered.
pub fn collect_file_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::not_found(dir.display().to_string()));
    }

    let mut paths = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()));
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable directory entry: {}", err);
                continue;
            }
        };
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}
