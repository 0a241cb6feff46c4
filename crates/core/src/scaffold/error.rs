//! Error types for scaffold operations.
//!
//! Cancellation is not represented here: steps that can be cancelled return
//! `ScaffoldResult<Option<T>>` and `None` means the user walked away.

use crate::config::error::ConfigError;
use crate::init::InitError;
use crate::ports::prompt::PromptError;
use crate::template::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for scaffold operations.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Failures that end an operation with a user-visible message.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The merged catalog is empty.
    #[error("No template found")]
    NoTemplatesFound,

    /// One or more planned files already exist; nothing was written.
    #[error("File already exists: {}", display_paths(.paths))]
    WriteConflict { paths: Vec<PathBuf> },

    /// No workspace or target directory could be determined.
    #[error("{0}")]
    TargetResolution(String),

    /// A rendered file path leads outside the target directory.
    #[error("Rendered path leaves the target directory: {0}")]
    PathOutsideTarget(String),

    /// A path or content pattern could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Creating a template definition failed.
    #[error(transparent)]
    Init(#[from] InitError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A prompt failed for a reason other than cancellation.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Writing a planned file failed.
    #[error("Failed to write file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
