//! Template definitions: validation, rendering, discovery and merging.
//!
//! - [`schema`]: Structural validation of parsed documents
//! - [`render`]: Placeholder substitution for paths and contents
//! - [`locator`]: Finding and loading definitions in one collection root
//! - [`catalog`]: Merging several collections into one selectable list

pub mod catalog;
pub mod error;
pub mod locator;
pub mod render;
pub mod schema;

use std::collections::BTreeMap;

pub use error::{RenderError, SchemaError, TemplateLoadError};

/// Collected parameter values, keyed by parameter key.
pub type ParamValues = BTreeMap<String, String>;

/// File extensions recognized as template documents.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];
