//! Common constants used throughout the quickstart application.

/// Supported configuration file names, probed in order inside the template
pub const CONFIG_FILES: [&str; 3] =
    ["quickstart.json", "quickstart.yml", "quickstart.yaml"];

/// Default metadata file patched with the request fields
pub const DEFAULT_METADATA_FILE: &str = "plugin.json";

/// Default extension allow-list for text substitution
pub const DEFAULT_TEXT_EXTENSIONS: [&str; 7] =
    ["js", "json", "tpl", "less", "md", "css", "html"];
