//! Recursive file enumeration.
//! Yields every regular file beneath a directory; directories themselves are
//! never yielded. Read-only.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every regular file transitively contained under `root`, as absolute
/// paths, in walkdir's deterministic-per-run order.
///
/// # Errors
/// * `Error::IoError` if the root does not exist or an entry is unreadable
pub fn list_files<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
