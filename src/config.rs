//! Configuration handling for quickstart templates.
//! A template ships a configuration file (quickstart.json, quickstart.yml or
//! quickstart.yaml) next to its content, describing which placeholder tokens
//! to rewrite and which files are eligible for text substitution.

use crate::constants::{CONFIG_FILES, DEFAULT_METADATA_FILE, DEFAULT_TEXT_EXTENSIONS};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The request field a token rule substitutes in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestField {
    Identifier,
    Name,
    Description,
    Author,
}

/// One substitution rule as declared by the template: a pattern matched
/// globally within file contents, replaced by the named request field.
/// Rules apply in declared order; later rules see earlier rules' output.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRule {
    /// Regular expression matched against file contents
    pub pattern: String,
    /// Request field whose value replaces every match
    pub field: RequestField,
}

/// Template-side configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Ordered placeholder rewrite rules
    #[serde(default)]
    pub rules: Vec<TokenRule>,

    /// Extension allow-list for text substitution; anything else is copied
    /// verbatim and never opened as text
    #[serde(default = "default_text_extensions")]
    pub text_extensions: Vec<String>,

    /// Path of the structured metadata file, relative to the target root
    #[serde(default = "default_metadata_file")]
    pub metadata_file: PathBuf,

    /// Prefix prepended to derived identifiers (e.g. "nodebb-plugin-")
    #[serde(default)]
    pub identifier_prefix: String,
}

fn default_text_extensions() -> Vec<String> {
    DEFAULT_TEXT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

fn default_metadata_file() -> PathBuf {
    PathBuf::from(DEFAULT_METADATA_FILE)
}

/// Loads configuration from a template directory, trying multiple file names.
/// Supports: quickstart.json, quickstart.yml, quickstart.yaml
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn load_config<P: AsRef<Path>>(template_dir: P) -> Result<String> {
    for file in CONFIG_FILES {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(std::fs::read_to_string(&config_path)?);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found (tried: {})",
        CONFIG_FILES.join(", ")
    )))
}

/// Parses configuration content, trying JSON first and falling back to YAML.
///
/// # Errors
/// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML
pub fn parse_config(content: &str) -> Result<Config> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e))),
    }
}

/// Loads and parses the template configuration in one step.
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<Config> {
    let content = load_config(template_dir)?;
    parse_config(&content)
}
