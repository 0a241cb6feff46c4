//! Operation surface between a host and the scaffolding core.
//!
//! The protocol follows an Operation/Outcome pattern:
//! - `Op`: One of the four scaffold commands a host can trigger
//! - `Outcome`: The single user-visible result of running an operation
//!
//! Failures are not part of `Outcome`; they travel as errors from `sk-core`
//! and the host turns them into a message.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use ts_rs::TS;

/// Scope of a template collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// Per-user collection, shared across every workspace.
    User,
    /// Collection stored inside one workspace.
    Workspace,
}

/// Operations a host can request.
///
/// Uses tagged enum serialization for TypeScript compatibility:
/// ```json
/// {
///   "type": "generateHere",
///   "payload": {
///     "target": "/work/app/src/components"
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Op {
    /// Create a new template definition in the given collection.
    CreateTemplate { scope: Scope },

    /// Generate files from a template into a known directory.
    GenerateHere {
        /// Directory the rendered paths are resolved against.
        target: PathBuf,
    },

    /// Generate files from a template into a directory chosen interactively.
    GenerateIn,
}

/// Result of an operation that did not fail.
///
/// ```json
/// {
///   "type": "filesWritten",
///   "payload": { "count": 2, "paths": ["/work/Bar.tsx", "/work/Bar.module.css"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Outcome {
    /// Files were extracted from a template.
    FilesWritten {
        /// Number of files actually written.
        count: usize,
        /// Absolute locations of the written files, in write order.
        paths: Vec<PathBuf>,
    },

    /// A new template definition was written.
    TemplateCreated { path: PathBuf },

    /// A template definition with the requested name already exists.
    ///
    /// Nothing was written; the host is asked to focus the existing file.
    TemplateExists { path: PathBuf },

    /// The user abandoned the operation. Not an error, nothing is shown.
    Cancelled,
}

impl Outcome {
    /// Returns true if the user cancelled the operation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}
