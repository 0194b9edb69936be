//! Quickstart is a project generator for plugin skeletons.
//! It copies a template directory into a fresh target, rewrites placeholder
//! tokens across text files and patches the project's metadata file with the
//! requested identifiers.

/// Command-line interface module for the quickstart application
pub mod cli;

/// Template configuration handling
/// Supports JSON and YAML formats (quickstart.json, quickstart.yml,
/// quickstart.yaml)
pub mod config;

/// Common constants: well-known file names and defaults
pub mod constants;

/// Error types and handling for the quickstart application
pub mod error;

/// Generation orchestration
/// Combines all components to produce the final output
pub mod generator;

/// Logger configuration
pub mod logger;

/// Target directory creation and template deep copy
pub mod materializer;

/// Structured metadata file patching
pub mod metadata;

/// The resolved generation request and identifier derivation
pub mod request;

/// Token substitution across eligible text files
pub mod substitute;

/// Recursive file enumeration
pub mod walker;
