//! Template discovery inside one collection root.
//!
//! A collection root is a flat directory of template documents:
//! ```text
//! templates/
//! ├── component.yaml
//! ├── service.yml
//! └── crate.json
//! ```
//! Only immediate regular files with a recognized extension are considered.
//! A document that cannot be read, parsed or validated is dropped and logged;
//! it never fails the whole collection.

use crate::ports::fs::FileSystem;
use crate::template::error::{TemplateLoadError, TemplateLoadResult};
use crate::template::schema::validate;
use crate::template::TEMPLATE_EXTENSIONS;
use serde_json::Value;
use sk_protocol::template_models::TemplateDefinition;
use std::path::Path;

/// Loads every valid template definition found directly inside `root`.
///
/// Returns an empty list when `root` does not exist or is not a directory.
/// The result follows directory listing order (by file name).
pub async fn locate(fs: &dyn FileSystem, root: &Path) -> Vec<TemplateDefinition> {
    if !fs.is_directory(root).await {
        tracing::debug!(root = %root.display(), "template collection not found");
        return Vec::new();
    }

    let entries = match fs.list_directory(root).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(root = %root.display(), error = %e, "failed to list template collection");
            return Vec::new();
        }
    };

    let mut templates = Vec::new();

    for entry in entries {
        if !entry.is_file || !is_template_document(&entry.path) {
            continue;
        }

        match load_template(fs, &entry.path).await {
            Ok(template) => templates.push(template),
            Err(e) => tracing::warn!(error = %e, "skipping template document"),
        }
    }

    tracing::debug!(root = %root.display(), count = templates.len(), "located templates");
    templates
}

/// Reads, parses and validates one template document.
///
/// # Errors
///
/// Returns `TemplateLoadError` if the file cannot be read, is not valid
/// YAML/JSON, or does not match the template schema.
pub async fn load_template(fs: &dyn FileSystem, path: &Path) -> TemplateLoadResult<TemplateDefinition> {
    let content = fs
        .read_to_string(path)
        .await
        .map_err(|source| TemplateLoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    parse_template(path, &content)
}

/// Parses document text into an untyped tree and validates it.
///
/// `.json` documents are parsed as JSON; everything else as YAML.
pub fn parse_template(path: &Path, content: &str) -> TemplateLoadResult<TemplateDefinition> {
    let raw: Value = if has_extension(path, "json") {
        serde_json::from_str(content).map_err(|source| TemplateLoadError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_yaml::from_str(content).map_err(|source| TemplateLoadError::YamlParse {
            path: path.to_path_buf(),
            source,
        })?
    };

    validate(&raw).map_err(|source| TemplateLoadError::Schema {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns true if the file name ends in a recognized template extension.
pub fn is_template_document(path: &Path) -> bool {
    TEMPLATE_EXTENSIONS
        .iter()
        .any(|ext| has_extension(path, ext))
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(ext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::fs::LocalFileSystem;
    use std::fs;
    use tempfile::tempdir;

    const COMPONENT_YAML: &str = r#"name: Component
description: Create a component
params:
  - key: name
    default: Foo
files:
  - path: "{{name}}.txt"
    content: "hello {{name}}"
"#;

    #[tokio::test]
    async fn test_locate_missing_root_is_empty() {
        let dir = tempdir().expect("Failed to create temp dir");

        let templates = locate(&LocalFileSystem, &dir.path().join("nope")).await;

        assert!(templates.is_empty());
    }

    #[tokio::test]
    async fn test_locate_root_that_is_a_file_is_empty() {
        let dir = tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("templates");
        fs::write(&file, COMPONENT_YAML).expect("Failed to write file");

        assert!(locate(&LocalFileSystem, &file).await.is_empty());
    }

    #[tokio::test]
    async fn test_locate_loads_all_extensions_in_name_order() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        fs::write(root.join("b.yml"), COMPONENT_YAML.replace("Component", "B"))
            .expect("Failed to write file");
        fs::write(root.join("a.yaml"), COMPONENT_YAML.replace("Component", "A"))
            .expect("Failed to write file");
        fs::write(
            root.join("c.json"),
            r#"{"name": "C", "params": [], "files": []}"#,
        )
        .expect("Failed to write file");

        let names: Vec<_> = locate(&LocalFileSystem, root)
            .await
            .into_iter()
            .map(|t| t.name)
            .collect();

        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_locate_drops_invalid_documents() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        fs::write(root.join("good.yaml"), COMPONENT_YAML).expect("Failed to write file");
        fs::write(root.join("broken.yaml"), "name: [unterminated").expect("Failed to write file");
        fs::write(root.join("no-default.yaml"), "name: X\nparams:\n  - key: a\nfiles: []\n")
            .expect("Failed to write file");
        fs::write(root.join("bad.json"), "{ not json").expect("Failed to write file");

        let templates = locate(&LocalFileSystem, root).await;

        assert_eq!(templates.len(), 1, "only the valid document survives");
        assert_eq!(templates[0].name, "Component");
    }

    #[tokio::test]
    async fn test_locate_ignores_other_files_and_directories() {
        let dir = tempdir().expect("Failed to create temp dir");
        let root = dir.path();

        fs::write(root.join("notes.txt"), COMPONENT_YAML).expect("Failed to write file");
        fs::create_dir_all(root.join("nested.yaml")).expect("Failed to create dir");
        fs::write(root.join("nested.yaml/inner.yaml"), COMPONENT_YAML).expect("Failed to write file");

        assert!(locate(&LocalFileSystem, root).await.is_empty());
    }

    #[test]
    fn test_parse_template_reports_schema_path() {
        let result = parse_template(Path::new("x.yaml"), "name: X\nparams: []\n");

        match result {
            Err(TemplateLoadError::Schema { path, source }) => {
                assert!(path.ends_with("x.yaml"));
                assert_eq!(source.path(), "files");
            }
            other => panic!("Expected Schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_template_json_uses_json_parser() {
        let result = parse_template(Path::new("x.json"), "name: X");
        assert!(matches!(result, Err(TemplateLoadError::JsonParse { .. })));
    }

    #[test]
    fn test_is_template_document() {
        assert!(is_template_document(Path::new("a.yaml")));
        assert!(is_template_document(Path::new("a.yml")));
        assert!(is_template_document(Path::new("a.json")));
        assert!(!is_template_document(Path::new("a.yaml.bak")));
        assert!(!is_template_document(Path::new("yaml")));
    }
}
