//! Turning file blueprints into a concrete file plan.

use crate::scaffold::error::{ScaffoldError, ScaffoldResult};
use crate::template::render::Renderer;
use crate::template::ParamValues;
use sk_protocol::template_models::FileBlueprint;
use std::path::{Component, Path, PathBuf};

/// One planned file: where it goes and what it contains.
///
/// Lives only for the duration of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile<'a> {
    /// Absolute location of the file.
    pub path: PathBuf,
    /// Final file text.
    pub content: String,
    /// Blueprint the file was rendered from.
    pub blueprint: &'a FileBlueprint,
}

/// Renders every blueprint's path and content against `params`.
///
/// Rendered paths are resolved against `base_dir`. Leading separators are
/// stripped, and a path with a `..` or drive component is rejected, so every
/// planned file lies under `base_dir`. The plan keeps blueprint order, which
/// is also write order.
///
/// # Errors
///
/// Returns `ScaffoldError::Render` if any path or content pattern fails to
/// render, and `ScaffoldError::PathOutsideTarget` if a rendered path leaves
/// `base_dir`. No partial plan is returned.
pub fn build<'a>(
    renderer: &Renderer,
    base_dir: &Path,
    blueprints: &'a [FileBlueprint],
    params: &ParamValues,
) -> ScaffoldResult<Vec<RenderedFile<'a>>> {
    blueprints
        .iter()
        .map(|blueprint| -> ScaffoldResult<RenderedFile<'a>> {
            let rendered = renderer.render(&blueprint.path, params)?;
            let relative = Path::new(rendered.trim_start_matches(['/', '\\']));
            if !stays_inside(relative) {
                return Err(ScaffoldError::PathOutsideTarget(rendered));
            }
            let content = renderer.render(&blueprint.content, params)?;
            Ok(RenderedFile {
                path: base_dir.join(relative),
                content,
                blueprint,
            })
        })
        .collect()
}

fn stays_inside(relative: &Path) -> bool {
    relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
