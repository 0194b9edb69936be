//! Token substitution over the materialized target.
//! Applies an ordered pipeline of global pattern replacements to every
//! eligible text file, accumulating per-file failures instead of aborting.

use crate::config::TokenRule;
use crate::error::{Error, Result};
use crate::request::GenerationRequest;
use crate::walker::list_files;
use log::debug;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;

/// A compiled substitution rule: a pattern applied globally within file
/// contents and the literal string that replaces every match.
#[derive(Debug)]
pub struct SubstitutionRule {
    pub pattern: Regex,
    pub value: String,
}

/// Compiles the template's token rules against a request, resolving each
/// rule's field reference to its literal replacement value.
///
/// # Errors
/// * `Error::ConfigError` if a rule's pattern is not a valid regular
///   expression
pub fn compile_rules(
    rules: &[TokenRule],
    request: &GenerationRequest,
) -> Result<Vec<SubstitutionRule>> {
    rules
        .iter()
        .map(|rule| {
            let pattern = Regex::new(&rule.pattern).map_err(|e| {
                Error::ConfigError(format!("Invalid rule pattern '{}': {}", rule.pattern, e))
            })?;
            Ok(SubstitutionRule { pattern, value: request.field(rule.field).to_string() })
        })
        .collect()
}

/// Returns true when the file's extension is in the allow-list. Extensions
/// are compared without their leading dot.
pub fn is_eligible(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
        .unwrap_or(false)
}

/// Applies every rule, in declared order, to a single file's contents.
/// Later rules see the output of earlier rules.
fn substitute_file(path: &Path, rules: &[SubstitutionRule]) -> std::io::Result<()> {
    let mut content = fs::read_to_string(path)?;
    for rule in rules {
        content = rule.pattern.replace_all(&content, NoExpand(&rule.value)).into_owned();
    }
    fs::write(path, content)
}

/// Rewrites placeholder tokens across the target tree.
///
/// Enumerates the populated target (not the template), so the pass reflects
/// exactly what was copied. Files outside the extension allow-list are never
/// opened. A failure on one file is recorded and the pass continues; the
/// recorded failures are returned for the orchestrator's report.
///
/// # Errors
/// * `Error::IoError` if the target tree cannot be enumerated at all
pub fn substitute<P: AsRef<Path>>(
    target_root: P,
    rules: &[SubstitutionRule],
    extensions: &[String],
) -> Result<Vec<Error>> {
    let mut failures = Vec::new();

    for path in list_files(target_root.as_ref())? {
        if !is_eligible(&path, extensions) {
            debug!("Skipping non-text file: {}", path.display());
            continue;
        }

        debug!("Substituting tokens in: {}", path.display());
        if let Err(e) = substitute_file(&path, rules) {
            failures.push(Error::FileAccessError { path, source: e });
        }
    }

    Ok(failures)
}
