//! Template definition models for `templates/*.yaml` documents.
//!
//! These are the strongly-typed values produced by schema validation. They are
//! never deserialized straight from a document: the loader parses an untyped
//! tree first and hands it to the validator in `sk-core`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One named scaffold recipe.
///
/// # Example
///
/// ```yaml
/// name: Component
/// description: Create a new component
/// params:
///   - key: name
///     description: Component name
///     default: Foo
/// files:
///   - path: "{{name}}.txt"
///     open: true
///     content: "hello {{name}}"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct TemplateDefinition {
    /// Identifier shown to the user when selecting a template.
    pub name: String,

    /// Free text shown next to `name` during selection.
    #[serde(default)]
    pub description: Option<String>,

    /// Parameters in the order their values are collected.
    ///
    /// Keys are expected to be unique; when they are not, the value collected
    /// last wins in the rendering context.
    #[serde(rename = "params")]
    pub parameters: Vec<ParameterDefinition>,

    /// Files in the order they are checked and written.
    pub files: Vec<FileBlueprint>,
}

impl TemplateDefinition {
    /// Label used when the definition is offered for selection.
    pub fn label(&self) -> &str {
        &self.name
    }
}

/// One substitution variable of a template.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct ParameterDefinition {
    /// Lookup key in the rendering context.
    pub key: String,

    /// Allowed literal values. When non-empty, input is restricted to one of them.
    #[serde(rename = "enum", default)]
    pub choices: Option<Vec<String>>,

    /// Prompt text shown while collecting the value.
    #[serde(default)]
    pub description: Option<String>,

    /// Pre-filled value for free-form input.
    pub default: String,
}

impl ParameterDefinition {
    /// Returns the choices when the parameter is restricted to an enumeration.
    pub fn enumerated_choices(&self) -> Option<&[String]> {
        self.choices
            .as_deref()
            .filter(|choices| !choices.is_empty())
    }
}

/// One file to materialize.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, TS)]
pub struct FileBlueprint {
    /// Pattern producing a path relative to the target directory.
    pub path: String,

    /// Pattern producing the file text.
    pub content: String,

    /// Ask the host to focus the file once it has been written.
    #[serde(default)]
    pub open: bool,
}
