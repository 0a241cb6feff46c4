//! Error types for template documents and rendering.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for schema validation.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for loading one template document.
pub type TemplateLoadResult<T> = Result<T, TemplateLoadError>;

/// Result type for rendering a pattern.
pub type RenderResult<T> = Result<T, RenderError>;

/// A template document does not have the expected structure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A field is missing or holds a value of the wrong type.
    #[error("Schema mismatch at `{path}`: expected {expected}, found {found}")]
    SchemaMismatch {
        /// Field path inside the document, e.g. `params[2].default`.
        path: String,
        expected: &'static str,
        found: String,
    },
}

impl SchemaError {
    /// Field path the mismatch was found at.
    pub fn path(&self) -> &str {
        match self {
            SchemaError::SchemaMismatch { path, .. } => path,
        }
    }
}

/// Errors that make a single candidate document unusable.
///
/// These never leave the locator: the document is dropped and the error logged.
#[derive(Error, Debug)]
pub enum TemplateLoadError {
    /// Failed to read the document from disk.
    #[error("Failed to read template file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse a YAML document.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Failed to parse a JSON document.
    #[error("Failed to parse JSON file at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The document parsed but failed validation.
    #[error("Invalid template in {path}: {source}")]
    Schema { path: PathBuf, source: SchemaError },
}

/// The substitution engine could not produce text for a pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Malformed pattern, or an unknown placeholder in strict mode.
    #[error("Failed to render pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },
}
