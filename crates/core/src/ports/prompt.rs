//! Abstract "ask the user" capability.
//!
//! Every interactive question the core asks goes through [`PromptPort`]. A
//! prompt answers `Ok(None)` when the user dismisses it; that is a normal
//! cancellation, not an error.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors a prompt implementation can raise besides cancellation.
#[derive(Debug, Error)]
pub enum PromptError {
    /// No interactive terminal or UI is available.
    #[error("Not running in interactive mode")]
    NotInteractive,

    /// The prompt could not read or draw.
    #[error("Prompt I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The prompt produced an answer of the wrong kind.
    #[error("Unexpected prompt answer: {0}")]
    Unexpected(String),
}

/// One entry offered by [`PromptPort::pick_one`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickItem {
    pub label: String,
    pub description: Option<String>,
}

impl PickItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }
}

#[async_trait]
pub trait PromptPort: Send + Sync {
    /// Lets the user choose one of `items`; returns the chosen index.
    ///
    /// The index, not the label, identifies the answer so that entries with
    /// equal labels stay distinguishable.
    async fn pick_one(&self, title: Option<&str>, items: &[PickItem])
        -> PromptResult<Option<usize>>;

    /// Asks for free-form text, pre-filled with `initial`.
    async fn input_text(
        &self,
        prompt: Option<&str>,
        initial: Option<&str>,
    ) -> PromptResult<Option<String>>;

    /// Asks for a directory, starting the search at `start`.
    async fn pick_directory(&self, start: &Path) -> PromptResult<Option<PathBuf>>;
}
