//! The generation request: the resolved set of identifiers a run is
//! parameterized with. Collecting these values (flags, prompts) happens in
//! the shell around the core; the core only sees the finished request.

use crate::config::RequestField;
use crate::error::{Error, Result};
use cruet::Inflector;

/// A fully resolved generation request. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Human-readable project name, e.g. "My Awesome Plugin"
    pub name: String,
    /// Machine identifier, e.g. "nodebb-plugin-my-awesome-plugin"
    pub identifier: String,
    /// Short free-form description; may be empty
    pub description: String,
    /// Author attribution; may be empty
    pub author: String,
}

impl GenerationRequest {
    /// Builds a request, deriving the identifier from the name when none is
    /// given explicitly.
    pub fn new(
        name: String,
        identifier: Option<String>,
        description: String,
        author: String,
        identifier_prefix: &str,
    ) -> Self {
        let identifier = identifier
            .unwrap_or_else(|| derive_identifier(&name, identifier_prefix));
        Self { name, identifier, description, author }
    }

    /// Checks the invariant that must hold before materialization begins.
    ///
    /// # Errors
    /// * `Error::ValidationError` if the name or identifier is empty
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::ValidationError("project name cannot be empty".to_string()));
        }
        if self.identifier.trim().is_empty() {
            return Err(Error::ValidationError("identifier cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Returns the value of the named field.
    pub fn field(&self, field: RequestField) -> &str {
        match field {
            RequestField::Identifier => &self.identifier,
            RequestField::Name => &self.name,
            RequestField::Description => &self.description,
            RequestField::Author => &self.author,
        }
    }
}

/// Derives a default identifier: the configured prefix plus a kebab-case
/// slug of the display name.
pub fn derive_identifier(name: &str, prefix: &str) -> String {
    format!("{}{}", prefix, name.to_kebab_case())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_identifier() {
        assert_eq!(
            derive_identifier("My Awesome Plugin", "nodebb-plugin-"),
            "nodebb-plugin-my-awesome-plugin"
        );
        assert_eq!(derive_identifier("Simple", ""), "simple");
    }

    #[test]
    fn test_explicit_identifier_wins() {
        let request = GenerationRequest::new(
            "My Awesome Plugin".to_string(),
            Some("custom-id".to_string()),
            String::new(),
            String::new(),
            "nodebb-plugin-",
        );
        assert_eq!(request.identifier, "custom-id");
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let request = GenerationRequest::new(
            String::new(),
            Some("id".to_string()),
            String::new(),
            String::new(),
            "",
        );
        assert!(request.validate().is_err());

        let request = GenerationRequest {
            name: "Name".to_string(),
            identifier: "  ".to_string(),
            description: String::new(),
            author: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
