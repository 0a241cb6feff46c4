//! Collaborator interfaces the scaffolding core depends on.
//!
//! Business logic only talks to these traits, so hosts (a terminal, an editor
//! extension, a test) plug in their own filesystem, prompts and focus handling.

pub mod focus;
pub mod fs;
pub mod prompt;
pub mod scripted;

pub use focus::{FocusNotifier, NoopFocus};
pub use fs::{DirEntry, FileSystem, LocalFileSystem};
pub use prompt::{PickItem, PromptError, PromptPort, PromptResult};
pub use scripted::{Answer, Asked, RecordingFocus, ScriptedPrompt};
