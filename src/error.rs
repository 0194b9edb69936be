//! Error handling for the quickstart application.
//! Defines the error taxonomy used throughout the generation pipeline and
//! distinguishes fatal errors from recoverable, per-file ones.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stages, used to name where a fatal error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Validation,
    Materialization,
    Substitution,
    MetadataPatch,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Validation => "validation",
            Stage::Materialization => "materialization",
            Stage::Substitution => "substitution",
            Stage::MetadataPatch => "metadata patch",
        };
        write!(f, "{}", name)
    }
}

/// Custom error types for quickstart operations.
///
/// Fatal variants abort the run; `FileAccessError` and
/// `MalformedMetadataError` are recoverable and accumulate into the
/// generation report instead.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors in the template path or its contents
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents errors during configuration loading or parsing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents validation failures in the generation request
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The output directory already exists; nothing was written
    #[error("Target directory '{0}' already exists.")]
    TargetExistsError(PathBuf),

    /// The deep copy failed partway; the target may be partially populated
    #[error("Copy failed for '{path}': {source}.")]
    CopyError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single file could not be read or written during substitution
    #[error("Cannot process '{path}': {source}.")]
    FileAccessError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The metadata file is present but unparsable
    #[error("Metadata file '{path}' is malformed: {detail}.")]
    MalformedMetadataError { path: PathBuf, detail: String },

    /// Fatal wrapper naming the stage that failed
    #[error("Generation failed during {stage}: {source}")]
    StageError {
        stage: Stage,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps a fatal error with the stage it occurred in.
    pub fn at_stage(self, stage: Stage) -> Self {
        Error::StageError { stage, source: Box::new(self) }
    }
}

/// Convenience type alias for Results with quickstart's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// Prints the error message to stderr and exits with status code 1.
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
