//! Generation orchestration.
//! Sequences validation, materialization, token substitution and metadata
//! patching. Hard failures abort the run with the failing stage named;
//! per-file failures accumulate into the report and the run still completes
//! (degraded success).

use crate::config::Config;
use crate::error::{Error, Result, Stage};
use crate::materializer::materialize;
use crate::metadata::patch_metadata;
use crate::request::GenerationRequest;
use crate::substitute::{compile_rules, substitute};
use log::debug;
use std::path::{Path, PathBuf};

/// Outcome of a completed run. A non-empty warning list means degraded
/// success: the target was generated but some files could not be processed.
#[derive(Debug)]
pub struct Report {
    /// The populated output directory
    pub target_dir: PathBuf,
    /// Recoverable per-file failures recorded along the way
    pub warnings: Vec<Error>,
}

impl Report {
    /// True when the run completed without recording any failure.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Runs the full generation pipeline for one request.
///
/// # Flow
/// 1. Validates the request and compiles the rule set
/// 2. Materializes the template into the target directory
/// 3. Substitutes placeholder tokens across eligible files
/// 4. Patches the structured metadata file, if present
///
/// # Errors
/// Fatal errors (`ValidationError`, `ConfigError`, `TargetExistsError`,
/// `CopyError`, enumeration failures) are returned wrapped in a
/// `StageError` naming the failing stage. `FileAccessError` and
/// `MalformedMetadataError` are never returned; they accumulate in the
/// report's warning list.
pub fn generate(
    request: &GenerationRequest,
    config: &Config,
    template_root: &Path,
    target_root: &Path,
) -> Result<Report> {
    request.validate().map_err(|e| e.at_stage(Stage::Validation))?;
    let rules = compile_rules(&config.rules, request)
        .map_err(|e| e.at_stage(Stage::Validation))?;

    materialize(template_root, target_root)
        .map_err(|e| e.at_stage(Stage::Materialization))?;

    let mut warnings = substitute(target_root, &rules, &config.text_extensions)
        .map_err(|e| e.at_stage(Stage::Substitution))?;

    let metadata_path = target_root.join(&config.metadata_file);
    if metadata_path.exists() {
        if let Err(e) = patch_metadata(&metadata_path, request) {
            warnings.push(e);
        }
    } else {
        debug!("No metadata file at {}, skipping patch", metadata_path.display());
    }

    Ok(Report { target_dir: target_root.to_path_buf(), warnings })
}
