//! Test fixtures for creating workspaces and template collections.

use sk_core::config::loader::workspace_template_dir;
use sk_core::ports::RecordingFocus;
use sk_core::scaffold::ScaffoldContext;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// The single-parameter component template from the end-to-end scenario.
pub const COMPONENT_YAML: &str = r#"name: Component
description: A text component
params:
  - key: name
    default: Foo
files:
  - path: "{{name}}.txt"
    content: "hello {{name}}"
"#;

/// A three-file template with an enumerated parameter.
pub const MODULE_YAML: &str = r##"name: Module
params:
  - key: name
    description: Module name
    default: widget
  - key: kind
    description: Module kind
    enum: [lib, bin]
    default: lib
files:
  - path: "{{name}}/mod.rs"
    open: true
    content: "pub mod {{name}}_{{kind}};\n"
  - path: "{{name}}/{{name}}_{{kind}}.rs"
    content: "// {{kind}} module {{name}}\n"
  - path: "{{name}}/README.md"
    content: "# {{name}}\n"
"##;

/// A temporary environment with one workspace and one user collection.
///
/// The `TempDir` must be kept alive for the duration of the test.
#[allow(dead_code)]
pub struct TestEnv {
    pub dir: TempDir,
    pub workspace: PathBuf,
    pub user_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> std::io::Result<Self> {
        let dir = tempfile::tempdir()?;
        let workspace = dir.path().join("workspace");
        let user_dir = dir.path().join("user-templates");
        std::fs::create_dir_all(&workspace)?;

        Ok(Self {
            dir,
            workspace,
            user_dir,
        })
    }

    /// Write a template document into the workspace collection.
    pub fn add_workspace_template(&self, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
        write_template(&workspace_template_dir(&self.workspace), file_name, content)
    }

    /// Write a template document into the user collection.
    pub fn add_user_template(&self, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
        write_template(&self.user_dir, file_name, content)
    }

    /// A context on the local disk that records focus requests.
    pub fn context(&self) -> (ScaffoldContext, Arc<RecordingFocus>) {
        let focus = Arc::new(RecordingFocus::new());
        let ctx = ScaffoldContext::new(self.user_dir.clone(), vec![self.workspace.clone()])
            .with_focus(focus.clone());
        (ctx, focus)
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.workspace.join(relative)
    }
}

fn write_template(dir: &Path, file_name: &str, content: &str) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, content)?;
    Ok(path)
}
