//! Error types for creating template definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for initialization operations.
pub type InitResult<T> = Result<T, InitError>;

/// Errors that can occur while creating a template definition.
#[derive(Debug, Error)]
pub enum InitError {
    /// A required asset was not found in the embedded files.
    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    /// The template name cannot be used as a file name.
    #[error("Invalid template name {0:?}: names cannot contain path separators")]
    InvalidName(String),

    /// The bootstrap template could not be rendered.
    #[error(transparent)]
    Render(#[from] crate::template::RenderError),

    /// Failed to write the new definition.
    #[error("Failed to write file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
