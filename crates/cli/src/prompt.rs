//! Terminal prompts backed by dialoguer.

use async_trait::async_trait;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use sk_core::ports::{PickItem, PromptError, PromptPort, PromptResult};
use std::path::{Path, PathBuf};

/// Asks questions on the controlling terminal.
///
/// Every prompt fails with [`PromptError::NotInteractive`] when stderr is not
/// attended, so scripted runs fail instead of hanging.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt;

fn ensure_interactive() -> PromptResult<()> {
    if console::user_attended_stderr() {
        Ok(())
    } else {
        Err(PromptError::NotInteractive)
    }
}

/// Runs a blocking dialoguer prompt off the async runtime.
async fn blocking<T, F>(prompt: F) -> PromptResult<T>
where
    F: FnOnce() -> Result<T, dialoguer::Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(prompt)
        .await
        .map_err(|e| PromptError::Unexpected(e.to_string()))?
        .map_err(|dialoguer::Error::IO(e)| PromptError::Io(e))
}

fn item_line(item: &PickItem) -> String {
    match &item.description {
        Some(description) => format!("{}  {}", item.label, style(description).dim()),
        None => item.label.clone(),
    }
}

#[async_trait]
impl PromptPort for TerminalPrompt {
    async fn pick_one(
        &self,
        title: Option<&str>,
        items: &[PickItem],
    ) -> PromptResult<Option<usize>> {
        ensure_interactive()?;
        let title = title.map(str::to_string);
        let lines: Vec<String> = items.iter().map(item_line).collect();

        blocking(move || {
            let theme = ColorfulTheme::default();
            let mut select = Select::with_theme(&theme).items(&lines).default(0);
            if let Some(title) = title {
                select = select.with_prompt(title);
            }
            select.interact_opt()
        })
        .await
    }

    async fn input_text(
        &self,
        prompt: Option<&str>,
        initial: Option<&str>,
    ) -> PromptResult<Option<String>> {
        ensure_interactive()?;
        let prompt = prompt.unwrap_or("Value").to_string();
        let initial = initial.map(str::to_string);

        let answer = blocking(move || {
            let theme = ColorfulTheme::default();
            let mut input = Input::<String>::with_theme(&theme)
                .with_prompt(prompt)
                .allow_empty(true);
            if let Some(initial) = initial {
                input = input.with_initial_text(initial);
            }
            input.interact_text()
        })
        .await?;

        Ok(Some(answer))
    }

    async fn pick_directory(&self, start: &Path) -> PromptResult<Option<PathBuf>> {
        ensure_interactive()?;
        let start = start.to_path_buf();
        let initial = start.display().to_string();

        let answer = blocking(move || {
            let theme = ColorfulTheme::default();
            Input::<String>::with_theme(&theme)
                .with_prompt("Target directory")
                .with_initial_text(initial)
                .allow_empty(true)
                .interact_text()
        })
        .await?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        // Relative answers are taken from the workspace root.
        Ok(Some(start.join(answer)))
    }
}
