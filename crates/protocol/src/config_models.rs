//! Global configuration models for `.scaffold-kit/config.toml`.
//!
//! This module defines the structure of the project configuration file that
//! controls how templates are located and rendered.

use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;
use ts_rs::TS;

/// Represents global settings from `.scaffold-kit/config.toml`.
///
/// # Example
///
/// ```toml
/// # .scaffold-kit/config.toml
/// strict_placeholders = true
/// user_template_dir = "/home/me/.templates"
/// bootstrap_template = "tools/new-template.yaml"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, TS)]
pub struct GlobalConfig {
    /// Fail rendering when a placeholder names an unknown parameter.
    ///
    /// Off by default: unknown placeholders render as empty text.
    #[serde(default)]
    pub strict_placeholders: bool,

    /// Replaces the platform default user collection root.
    #[serde(default)]
    pub user_template_dir: Option<PathBuf>,

    /// File used instead of the embedded text when creating a new template.
    ///
    /// Relative paths are resolved against the workspace root.
    #[serde(default)]
    pub bootstrap_template: Option<PathBuf>,
}
