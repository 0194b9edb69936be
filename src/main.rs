//! Quickstart's main application entry point.
//! Handles command-line argument parsing, path resolution and coordinates
//! the generation pipeline.

use std::path::PathBuf;

use quickstart::{
    cli::{get_args, Args},
    config::get_config,
    error::{default_error_handler, Error, Result},
    generator::generate,
    logger::init_logger,
    request::GenerationRequest,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Resolves the template argument to an absolute path.
///
/// # Errors
/// * `Error::TemplateError` if the path does not exist or is not a directory
fn resolve_template_root(template: &PathBuf) -> Result<PathBuf> {
    if !template.is_dir() {
        return Err(Error::TemplateError(format!(
            "template path '{}' does not exist or is not a directory",
            template.display()
        )));
    }
    template.canonicalize().map_err(Error::IoError)
}

/// Resolves the output directory to an absolute path without requiring it to
/// exist. Defaults to `<cwd>/<identifier>` when no directory was given.
fn resolve_target_root(output_dir: Option<PathBuf>, identifier: &str) -> Result<PathBuf> {
    let base = std::env::current_dir().map_err(Error::IoError)?;
    let target = output_dir.unwrap_or_else(|| PathBuf::from(identifier));
    Ok(if target.is_absolute() { target } else { base.join(target) })
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the template directory and loads its configuration
/// 2. Builds the generation request, deriving the identifier if needed
/// 3. Runs the generation pipeline
/// 4. Prints the summary; per-file failures are surfaced as warnings and the
///    process still exits zero (degraded success)
fn run(args: Args) -> Result<()> {
    let template_root = resolve_template_root(&args.template)?;
    let config = get_config(&template_root)?;

    let request = GenerationRequest::new(
        args.name,
        args.id,
        args.description,
        args.author,
        &config.identifier_prefix,
    );
    let target_root = resolve_target_root(args.output_dir, &request.identifier)?;

    let report = generate(&request, &config, &template_root, &target_root)?;

    for warning in &report.warnings {
        log::warn!("{}", warning);
    }
    if report.is_clean() {
        println!("Project generated successfully in {}.", report.target_dir.display());
    } else {
        println!(
            "Project generated in {} with {} warning(s).",
            report.target_dir.display(),
            report.warnings.len()
        );
    }
    Ok(())
}
