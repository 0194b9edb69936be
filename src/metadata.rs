//! Structured metadata patching.
//! After textual substitution has run, the one well-known metadata file is
//! parsed as a key-value document and four fields are set directly from the
//! request. Direct assignment wins over whatever the textual pass produced
//! for those keys.

use crate::error::{Error, Result};
use crate::request::GenerationRequest;
use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::Path;

/// Overwrites the metadata document's id, name, description and author
/// fields with the request's values, then re-serializes it canonically
/// (keys in encounter order, 2-space indentation). The file is rewritten in
/// full, which may reformat it even when no field changed.
///
/// # Errors
/// * `Error::FileAccessError` if the file cannot be read or written
/// * `Error::MalformedMetadataError` if the content is not a valid key-value
///   document
pub fn patch_metadata<P: AsRef<Path>>(path: P, request: &GenerationRequest) -> Result<()> {
    let path = path.as_ref();
    debug!("Patching metadata file: {}", path.display());

    let content = fs::read_to_string(path)
        .map_err(|e| Error::FileAccessError { path: path.to_path_buf(), source: e })?;

    let mut document: IndexMap<String, serde_json::Value> = serde_json::from_str(&content)
        .map_err(|e| Error::MalformedMetadataError {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    document.insert("id".to_string(), request.identifier.clone().into());
    document.insert("name".to_string(), request.name.clone().into());
    document.insert("description".to_string(), request.description.clone().into());
    document.insert("author".to_string(), request.author.clone().into());

    let serialized = serde_json::to_string_pretty(&document)
        .map_err(|e| Error::MalformedMetadataError {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;

    fs::write(path, serialized + "\n")
        .map_err(|e| Error::FileAccessError { path: path.to_path_buf(), source: e })
}
