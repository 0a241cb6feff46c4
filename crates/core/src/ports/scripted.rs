//! Deterministic port implementations for tests and non-interactive hosts.

use crate::ports::focus::FocusNotifier;
use crate::ports::prompt::{PickItem, PromptError, PromptPort, PromptResult};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// A scripted answer to the next prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Choose the item at this index.
    Pick(usize),
    /// Enter this text.
    Text(String),
    /// Accept the pre-filled value of a text prompt.
    AcceptDefault,
    /// Choose this directory.
    Directory(PathBuf),
    /// Dismiss the prompt.
    Cancel,
}

/// A prompt that was issued, in the order it was issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Asked {
    PickOne {
        title: Option<String>,
        labels: Vec<String>,
    },
    InputText {
        prompt: Option<String>,
        initial: Option<String>,
    },
    PickDirectory {
        start: PathBuf,
    },
}

/// [`PromptPort`] that replays a fixed list of answers and records every prompt.
///
/// Once the script runs out, every further prompt is dismissed.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Mutex<VecDeque<Answer>>,
    asked: Mutex<Vec<Asked>>,
}

impl ScriptedPrompt {
    pub fn new(answers: impl IntoIterator<Item = Answer>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt issued so far.
    pub fn asked(&self) -> Vec<Asked> {
        self.asked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of scripted answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.answers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    fn next(&self, asked: Asked) -> Answer {
        self.asked
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(asked);
        self.answers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or(Answer::Cancel)
    }
}

#[async_trait]
impl PromptPort for ScriptedPrompt {
    async fn pick_one(
        &self,
        title: Option<&str>,
        items: &[PickItem],
    ) -> PromptResult<Option<usize>> {
        let asked = Asked::PickOne {
            title: title.map(str::to_string),
            labels: items.iter().map(|item| item.label.clone()).collect(),
        };
        match self.next(asked) {
            Answer::Pick(index) => Ok(Some(index)),
            Answer::Cancel => Ok(None),
            other => Err(PromptError::Unexpected(format!("{other:?} for pick_one"))),
        }
    }

    async fn input_text(
        &self,
        prompt: Option<&str>,
        initial: Option<&str>,
    ) -> PromptResult<Option<String>> {
        let asked = Asked::InputText {
            prompt: prompt.map(str::to_string),
            initial: initial.map(str::to_string),
        };
        match self.next(asked) {
            Answer::Text(text) => Ok(Some(text)),
            Answer::AcceptDefault => Ok(Some(initial.unwrap_or_default().to_string())),
            Answer::Cancel => Ok(None),
            other => Err(PromptError::Unexpected(format!("{other:?} for input_text"))),
        }
    }

    async fn pick_directory(&self, start: &Path) -> PromptResult<Option<PathBuf>> {
        let asked = Asked::PickDirectory {
            start: start.to_path_buf(),
        };
        match self.next(asked) {
            Answer::Directory(dir) => Ok(Some(dir)),
            Answer::Cancel => Ok(None),
            other => Err(PromptError::Unexpected(format!("{other:?} for pick_directory"))),
        }
    }
}

/// [`FocusNotifier`] that remembers every focused path.
#[derive(Debug, Default)]
pub struct RecordingFocus {
    focused: Mutex<Vec<PathBuf>>,
    fail: bool,
}

impl RecordingFocus {
    pub fn new() -> Self {
        Self::default()
    }

    /// A notifier that records the request and then reports a failure.
    pub fn failing() -> Self {
        Self {
            focused: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn focused(&self) -> Vec<PathBuf> {
        self.focused
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl FocusNotifier for RecordingFocus {
    async fn focus(&self, path: &Path) -> anyhow::Result<()> {
        self.focused
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_path_buf());
        if self.fail {
            anyhow::bail!("cannot focus {}", path.display());
        }
        Ok(())
    }
}
