//! Resolving which workspace an operation works in.

use crate::ports::prompt::{PickItem, PromptPort};
use crate::scaffold::error::{ScaffoldError, ScaffoldResult};
use std::path::{Path, PathBuf};

/// Chooses a workspace: the only one without asking, or one picked by the user.
///
/// Returns `Ok(None)` if the user dismisses the choice.
///
/// # Errors
///
/// Returns `ScaffoldError::TargetResolution` if no workspace is configured.
pub async fn select_workspace(
    workspaces: &[PathBuf],
    ask: &dyn PromptPort,
) -> ScaffoldResult<Option<PathBuf>> {
    match workspaces {
        [] => Err(ScaffoldError::TargetResolution("No workspace opened".to_string())),
        [only] => Ok(Some(only.clone())),
        many => {
            let items: Vec<PickItem> = many
                .iter()
                .map(|path| {
                    PickItem::new(workspace_label(path))
                        .with_description(Some(path.display().to_string()))
                })
                .collect();
            let picked = ask.pick_one(Some("Select the workspace"), &items).await?;
            Ok(picked.and_then(|index| many.get(index).cloned()))
        }
    }
}

/// The first workspace that contains `target`.
pub fn workspace_for<'a>(workspaces: &'a [PathBuf], target: &Path) -> Option<&'a PathBuf> {
    workspaces.iter().find(|workspace| target.starts_with(workspace))
}

/// Short name shown for a workspace: its directory name.
pub fn workspace_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
