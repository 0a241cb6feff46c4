//! Structural validation of template definition documents.
//!
//! Documents are parsed into an untyped [`Value`] tree first; [`validate`]
//! walks that tree and either builds a [`TemplateDefinition`] or reports the
//! first field that does not fit, with its path.
//!
//! Unknown keys are ignored. Optional fields accept an explicit `null` as
//! absent.

use crate::template::error::{SchemaError, SchemaResult};
use serde_json::{Map, Value};
use sk_protocol::template_models::{FileBlueprint, ParameterDefinition, TemplateDefinition};

/// Validates an untyped document tree against the template definition schema.
///
/// # Errors
///
/// Returns [`SchemaError::SchemaMismatch`] naming the offending field when:
/// - the document is not a mapping
/// - `name`, `params` or `files` is missing or has the wrong type
/// - a parameter lacks a text `key` or `default`, or has non-text `enum` items
/// - a file lacks a text `path` or `content`, or has a non-boolean `open`
///
/// # Example
///
/// ```
/// use sk_core::template::schema::validate;
/// use serde_json::json;
///
/// let doc = json!({
///     "name": "Component",
///     "params": [{ "key": "name", "default": "Foo" }],
///     "files": [{ "path": "{{name}}.txt", "content": "hello {{name}}" }],
/// });
/// let template = validate(&doc).unwrap();
/// assert_eq!(template.parameters[0].key, "name");
///
/// let err = validate(&json!({ "name": "x", "files": [] })).unwrap_err();
/// assert_eq!(err.path(), "params");
/// ```
pub fn validate(raw: &Value) -> SchemaResult<TemplateDefinition> {
    let root = as_object(raw, "$")?;

    let name = required_string(root, "", "name")?;
    let description = optional_string(root, "", "description")?;

    let parameters = required_array(root, "", "params")?
        .iter()
        .enumerate()
        .map(|(index, item)| validate_parameter(item, &format!("params[{index}]")))
        .collect::<SchemaResult<Vec<_>>>()?;

    let files = required_array(root, "", "files")?
        .iter()
        .enumerate()
        .map(|(index, item)| validate_file(item, &format!("files[{index}]")))
        .collect::<SchemaResult<Vec<_>>>()?;

    Ok(TemplateDefinition {
        name,
        description,
        parameters,
        files,
    })
}

fn validate_parameter(raw: &Value, path: &str) -> SchemaResult<ParameterDefinition> {
    let object = as_object(raw, path)?;

    let choices = match present(object.get("enum")) {
        None => None,
        Some(value) => {
            let enum_path = field_path(path, "enum");
            let items = value.as_array().ok_or_else(|| mismatch(&enum_path, "sequence", value))?;
            let choices = items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or_else(|| mismatch(&format!("{enum_path}[{index}]"), "text", item))
                })
                .collect::<SchemaResult<Vec<_>>>()?;
            Some(choices)
        }
    };

    Ok(ParameterDefinition {
        key: required_string(object, path, "key")?,
        choices,
        description: optional_string(object, path, "description")?,
        default: required_string(object, path, "default")?,
    })
}

fn validate_file(raw: &Value, path: &str) -> SchemaResult<FileBlueprint> {
    let object = as_object(raw, path)?;

    let open = match present(object.get("open")) {
        None => false,
        Some(value) => value
            .as_bool()
            .ok_or_else(|| mismatch(&field_path(path, "open"), "boolean", value))?,
    };

    Ok(FileBlueprint {
        path: required_string(object, path, "path")?,
        content: required_string(object, path, "content")?,
        open,
    })
}

fn as_object<'a>(value: &'a Value, path: &str) -> SchemaResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| mismatch(path, "mapping", value))
}

fn required_string(object: &Map<String, Value>, parent: &str, key: &str) -> SchemaResult<String> {
    let path = field_path(parent, key);
    match object.get(key) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(mismatch(&path, "text", other)),
        None => Err(missing(&path, "text")),
    }
}

fn optional_string(
    object: &Map<String, Value>,
    parent: &str,
    key: &str,
) -> SchemaResult<Option<String>> {
    match present(object.get(key)) {
        None => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(mismatch(&field_path(parent, key), "text", other)),
    }
}

fn required_array<'a>(
    object: &'a Map<String, Value>,
    parent: &str,
    key: &str,
) -> SchemaResult<&'a Vec<Value>> {
    let path = field_path(parent, key);
    match object.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(mismatch(&path, "sequence", other)),
        None => Err(missing(&path, "sequence")),
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn field_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

fn mismatch(path: &str, expected: &'static str, found: &Value) -> SchemaError {
    SchemaError::SchemaMismatch {
        path: path.to_string(),
        expected,
        found: kind_of(found).to_string(),
    }
}

fn missing(path: &str, expected: &'static str) -> SchemaError {
    SchemaError::SchemaMismatch {
        path: path.to_string(),
        expected,
        found: "nothing".to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "text",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn component() -> Value {
        json!({
            "name": "Component",
            "description": "Create a component",
            "params": [
                { "key": "name", "description": "Component name", "default": "Foo" },
                { "key": "style", "enum": ["css", "scss"], "default": "css" }
            ],
            "files": [
                { "path": "{{name}}.txt", "content": "hello {{name}}", "open": true },
                { "path": "{{name}}.{{style}}", "content": "" }
            ]
        })
    }

    fn mismatch_path(doc: Value) -> String {
        validate(&doc)
            .expect_err("document should be rejected")
            .path()
            .to_string()
    }

    #[test]
    fn test_validate_complete_document() {
        let template = validate(&component()).expect("valid document");

        assert_eq!(template.name, "Component");
        assert_eq!(template.description.as_deref(), Some("Create a component"));
        assert_eq!(template.parameters.len(), 2);
        assert_eq!(
            template.parameters[1].choices,
            Some(vec!["css".to_string(), "scss".to_string()])
        );
        assert!(template.files[0].open);
        assert!(!template.files[1].open);
    }

    #[test]
    fn test_validate_empty_params_and_files() {
        let template = validate(&json!({ "name": "Empty", "params": [], "files": [] }))
            .expect("empty sequences are allowed");

        assert!(template.parameters.is_empty());
        assert!(template.files.is_empty());
        assert_eq!(template.description, None);
    }

    #[test]
    fn test_rejects_missing_top_level_fields() {
        let mut doc = component();
        doc.as_object_mut().unwrap().remove("name");
        assert_eq!(mismatch_path(doc), "name");

        let mut doc = component();
        doc.as_object_mut().unwrap().remove("params");
        assert_eq!(mismatch_path(doc), "params");

        let mut doc = component();
        doc.as_object_mut().unwrap().remove("files");
        assert_eq!(mismatch_path(doc), "files");
    }

    #[test]
    fn test_rejects_parameter_without_default() {
        let mut doc = component();
        doc["params"][1].as_object_mut().unwrap().remove("default");

        let err = validate(&doc).expect_err("default is required");
        assert_eq!(
            err,
            SchemaError::SchemaMismatch {
                path: "params[1].default".to_string(),
                expected: "text",
                found: "nothing".to_string(),
            }
        );
    }

    #[test]
    fn test_rejects_wrong_types() {
        let mut doc = component();
        doc["name"] = json!(42);
        assert_eq!(mismatch_path(doc), "name");

        let mut doc = component();
        doc["params"][1]["enum"] = json!(["css", 3]);
        assert_eq!(mismatch_path(doc), "params[1].enum[1]");

        let mut doc = component();
        doc["files"][0]["open"] = json!("yes");
        assert_eq!(mismatch_path(doc), "files[0].open");

        let mut doc = component();
        doc["files"] = json!({ "path": "a" });
        assert_eq!(mismatch_path(doc), "files");

        assert_eq!(mismatch_path(json!(["not", "a", "mapping"])), "$");
    }

    #[test]
    fn test_null_optional_fields_are_absent() {
        let mut doc = component();
        doc["description"] = Value::Null;
        doc["params"][1]["enum"] = Value::Null;
        doc["files"][0]["open"] = Value::Null;

        let template = validate(&doc).expect("null optionals are accepted");
        assert_eq!(template.description, None);
        assert_eq!(template.parameters[1].choices, None);
        assert!(!template.files[0].open);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let mut doc = component();
        doc["version"] = json!(2);
        doc["files"][0]["mode"] = json!("0644");

        assert!(validate(&doc).is_ok());
    }
}
