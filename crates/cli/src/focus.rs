//! Focus handling for the terminal host.

use anyhow::Context;
use async_trait::async_trait;
use colored::Colorize;
use sk_core::ports::FocusNotifier;
use std::path::Path;
use tokio::process::Command;

/// Opens focused files in `$VISUAL` or `$EDITOR`, or prints their location.
#[derive(Debug, Clone, Default)]
pub struct EditorFocus {
    editor: Option<String>,
}

impl EditorFocus {
    pub fn new(open: bool) -> Self {
        if !open {
            return Self::default();
        }

        let editor = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|editor| !editor.trim().is_empty());
        if editor.is_none() {
            tracing::warn!("--open given but neither VISUAL nor EDITOR is set");
        }
        Self { editor }
    }
}

#[async_trait]
impl FocusNotifier for EditorFocus {
    async fn focus(&self, path: &Path) -> anyhow::Result<()> {
        let Some(editor) = &self.editor else {
            println!("{} {}", "open".cyan(), path.display());
            return Ok(());
        };

        // Editors are often configured with flags, e.g. `code --wait`.
        let mut words = editor.split_whitespace();
        let program = words.next().context("Editor command is empty")?;

        let status = Command::new(program)
            .args(words)
            .arg(path)
            .status()
            .await
            .with_context(|| format!("Failed to launch editor {editor}"))?;

        if !status.success() {
            anyhow::bail!("Editor {editor} exited with {status}");
        }
        Ok(())
    }
}
