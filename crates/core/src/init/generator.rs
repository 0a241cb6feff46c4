//! Writing a new template definition into a collection.

use super::error::{InitError, InitResult};
use super::templates::{bootstrap_template, BOOTSTRAP_TEMPLATE};
use crate::ports::fs::FileSystem;
use crate::template::render::Renderer;
use crate::template::ParamValues;
use std::path::{Path, PathBuf};

/// What [`write_new_template`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewTemplate {
    /// The definition was written to this path.
    Created(PathBuf),
    /// A definition already existed at this path; nothing was written.
    Exists(PathBuf),
}

impl NewTemplate {
    pub fn path(&self) -> &Path {
        match self {
            NewTemplate::Created(path) | NewTemplate::Exists(path) => path,
        }
    }
}

/// Create `<collection_dir>/<name>.yaml` from a bootstrap template.
///
/// The bootstrap text is rendered with a single value, `templateName`. Any
/// placeholder intended for the new definition must be escaped in the
/// bootstrap text as `\{{key}}`. When `bootstrap` is `None` the embedded
/// asset is used.
///
/// An existing file is never overwritten.
///
/// # Errors
/// Returns an `InitError` if:
/// - `name` contains a path separator or is `.`/`..`
/// - the embedded asset is missing
/// - the bootstrap text cannot be rendered
/// - writing fails
pub async fn write_new_template(
    fs: &dyn FileSystem,
    collection_dir: &Path,
    name: &str,
    bootstrap: Option<&str>,
) -> InitResult<NewTemplate> {
    validate_name(name)?;

    let target_path = collection_dir.join(format!("{name}.yaml"));
    if fs.exists(&target_path).await {
        return Ok(NewTemplate::Exists(target_path));
    }

    let bootstrap = match bootstrap {
        Some(text) => text.to_string(),
        None => bootstrap_template()
            .ok_or_else(|| InitError::TemplateNotFound(BOOTSTRAP_TEMPLATE.to_string()))?,
    };

    let mut context = ParamValues::new();
    context.insert("templateName".to_string(), name.to_string());
    let content = Renderer::new().render(&bootstrap, &context)?;

    fs.write_string(&target_path, &content)
        .await
        .map_err(|source| InitError::FileWrite {
            path: target_path.clone(),
            source,
        })?;

    tracing::info!(path = %target_path.display(), "created template definition");
    Ok(NewTemplate::Created(target_path))
}

fn validate_name(name: &str) -> InitResult<()> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(InitError::InvalidName(name.to_string()));
    }
    Ok(())
}
