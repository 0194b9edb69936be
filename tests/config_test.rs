use quickstart::config::{get_config, parse_config, RequestField};
use quickstart::error::Error;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_parse_json_config() {
    let content = r#"{
        "identifier_prefix": "nodebb-plugin-",
        "rules": [
            {"pattern": "nodebb-plugin-quickstart", "field": "identifier"},
            {"pattern": "Quickstart", "field": "name"}
        ],
        "text_extensions": ["js", "json"],
        "metadata_file": "package.json"
    }"#;

    let config = parse_config(content).unwrap();
    assert_eq!(config.identifier_prefix, "nodebb-plugin-");
    assert_eq!(config.rules.len(), 2);
    assert_eq!(config.rules[0].field, RequestField::Identifier);
    assert_eq!(config.rules[1].pattern, "Quickstart");
    assert_eq!(config.text_extensions, ["js", "json"]);
    assert_eq!(config.metadata_file, PathBuf::from("package.json"));
}

#[test]
fn test_parse_yaml_config() {
    let content = r#"
identifier_prefix: "nodebb-plugin-"
rules:
  - pattern: Quickstart
    field: name
"#;

    let config = parse_config(content).unwrap();
    assert_eq!(config.identifier_prefix, "nodebb-plugin-");
    assert_eq!(config.rules.len(), 1);
    assert_eq!(config.rules[0].field, RequestField::Name);
}

#[test]
fn test_defaults() {
    let config = parse_config("rules: []").unwrap();
    assert!(config.rules.is_empty());
    assert_eq!(config.identifier_prefix, "");
    assert_eq!(config.metadata_file, PathBuf::from("plugin.json"));
    assert!(config.text_extensions.iter().any(|e| e == "js"));
    assert!(config.text_extensions.iter().any(|e| e == "tpl"));
}

#[test]
fn test_invalid_config_is_rejected() {
    assert!(matches!(parse_config("rules: {broken"), Err(Error::ConfigError(_))));
}

#[test]
fn test_get_config_probes_file_names() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("quickstart.yaml"),
        "identifier_prefix: \"from-yaml-\"\n",
    )
    .unwrap();

    let config = get_config(temp_dir.path()).unwrap();
    assert_eq!(config.identifier_prefix, "from-yaml-");
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    assert!(matches!(get_config(temp_dir.path()), Err(Error::ConfigError(_))));
}
