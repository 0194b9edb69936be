//! Target directory materialization.
//! Validates that the output location is free, then deep-copies the template
//! subtree into it. Refusing an existing target is a hard stop, never a
//! merge; a failure mid-copy leaves partial state for the caller to clean up.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Returns true for template-root entries that are generator input rather
/// than template content.
fn is_config_file(relative_path: &Path) -> bool {
    relative_path
        .to_str()
        .map(|p| CONFIG_FILES.contains(&p))
        .unwrap_or(false)
}

/// Copies the template subtree into a freshly created target directory.
///
/// The target must not exist beforehand; on success it is a byte-identical
/// structural copy of the template, minus the configuration files at the
/// template root.
///
/// # Errors
/// * `Error::TargetExistsError` if the target path exists (file or directory);
///   no writes are performed in that case
/// * `Error::CopyError` if any entry fails to copy; the target may be left
///   partially populated, with no rollback
pub fn materialize<P: AsRef<Path>>(template_root: P, target_root: P) -> Result<()> {
    let template_root = template_root.as_ref();
    let target_root = target_root.as_ref();

    if target_root.exists() {
        return Err(Error::TargetExistsError(target_root.to_path_buf()));
    }

    fs::create_dir_all(target_root).map_err(|e| Error::CopyError {
        path: target_root.to_path_buf(),
        source: e,
    })?;

    for entry in WalkDir::new(template_root).min_depth(1) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();
        let relative_path = path
            .strip_prefix(template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;

        if is_config_file(relative_path) {
            debug!("Skipping configuration file: {}", relative_path.display());
            continue;
        }

        let target_path = target_root.join(relative_path);
        if entry.file_type().is_dir() {
            debug!("Creating directory: {}", target_path.display());
            fs::create_dir_all(&target_path).map_err(|e| Error::CopyError {
                path: target_path.clone(),
                source: e,
            })?;
        } else {
            debug!("Copying file: {}", target_path.display());
            fs::copy(path, &target_path).map(|_| ()).map_err(|e| Error::CopyError {
                path: target_path.clone(),
                source: e,
            })?;
        }
    }

    Ok(())
}
