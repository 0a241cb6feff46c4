//! The scaffold operations a host can run.
//!
//! Each operation ends in exactly one user-visible result: an [`Outcome`]
//! (including [`Outcome::Cancelled`]) or a [`ScaffoldError`]. Nothing is
//! written before the extraction's check phase has passed.

use crate::config::loader::workspace_template_dir;
use crate::config::models::AppConfig;
use crate::init::{write_new_template, NewTemplate};
use crate::ports::focus::{FocusNotifier, NoopFocus};
use crate::ports::fs::{FileSystem, LocalFileSystem};
use crate::ports::prompt::{PickItem, PromptPort};
use crate::scaffold::error::{ScaffoldError, ScaffoldResult};
use crate::scaffold::extract::{extract, Extraction};
use crate::scaffold::params::collect;
use crate::scaffold::plan::build;
use crate::scaffold::workspace::{select_workspace, workspace_for};
use crate::template::catalog::load_catalog;
use crate::template::render::Renderer;
use sk_protocol::ipc::{Op, Outcome, Scope};
use sk_protocol::template_models::TemplateDefinition;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything an operation needs besides the prompt.
pub struct ScaffoldContext {
    /// Filesystem used for discovery and extraction.
    pub fs: Arc<dyn FileSystem>,

    /// Receives "focus this file" requests.
    pub focus: Arc<dyn FocusNotifier>,

    /// Renderer for file paths and contents.
    pub renderer: Renderer,

    /// Root of the user-scope template collection.
    pub user_template_dir: PathBuf,

    /// Open workspaces, in preference order.
    pub workspaces: Vec<PathBuf>,

    /// Text for new template definitions; `None` uses the embedded asset.
    pub bootstrap_template: Option<String>,
}

impl ScaffoldContext {
    /// Create a context on the local disk with a permissive renderer.
    pub fn new(user_template_dir: PathBuf, workspaces: Vec<PathBuf>) -> Self {
        Self {
            fs: Arc::new(LocalFileSystem),
            focus: Arc::new(NoopFocus),
            renderer: Renderer::new(),
            user_template_dir,
            workspaces,
            bootstrap_template: None,
        }
    }

    /// Create a context from loaded configuration.
    pub fn from_config(config: AppConfig, workspaces: Vec<PathBuf>) -> Self {
        Self::new(config.user_template_dir, workspaces)
            .with_strict_placeholders(config.global.strict_placeholders)
            .with_bootstrap_template(config.bootstrap_template)
    }

    pub fn with_file_system(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_focus(mut self, focus: Arc<dyn FocusNotifier>) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_strict_placeholders(mut self, strict: bool) -> Self {
        self.renderer = Renderer::with_strict_mode(strict);
        self
    }

    pub fn with_bootstrap_template(mut self, bootstrap: Option<String>) -> Self {
        self.bootstrap_template = bootstrap;
        self
    }

    /// Collection roots searched for `workspace`: user scope first.
    pub fn collection_roots(&self, workspace: &Path) -> Vec<PathBuf> {
        vec![
            self.user_template_dir.clone(),
            workspace_template_dir(workspace),
        ]
    }
}

/// Runs the operation described by `op`.
pub async fn run(ctx: &ScaffoldContext, ask: &dyn PromptPort, op: &Op) -> ScaffoldResult<Outcome> {
    let outcome = match op {
        Op::CreateTemplate { scope } => create_template(ctx, ask, *scope).await,
        Op::GenerateHere { target } => generate_here(ctx, ask, target).await,
        Op::GenerateIn => generate_in(ctx, ask).await,
    };

    match &outcome {
        Ok(outcome) => tracing::info!(?outcome, "operation finished"),
        Err(e) => tracing::info!(error = %e, "operation failed"),
    }
    outcome
}

/// Creates a new template definition in the user collection.
pub async fn create_user_template(
    ctx: &ScaffoldContext,
    ask: &dyn PromptPort,
) -> ScaffoldResult<Outcome> {
    create_template(ctx, ask, Scope::User).await
}

/// Creates a new template definition in a workspace collection.
pub async fn create_workspace_template(
    ctx: &ScaffoldContext,
    ask: &dyn PromptPort,
) -> ScaffoldResult<Outcome> {
    create_template(ctx, ask, Scope::Workspace).await
}

/// Asks for a name and writes `<collection>/<name>.yaml` from the bootstrap text.
///
/// For [`Scope::Workspace`] the workspace is chosen first. An empty name is
/// treated as no answer. If the definition already exists it is focused and
/// left untouched.
pub async fn create_template(
    ctx: &ScaffoldContext,
    ask: &dyn PromptPort,
    scope: Scope,
) -> ScaffoldResult<Outcome> {
    let collection_dir = match scope {
        Scope::User => ctx.user_template_dir.clone(),
        Scope::Workspace => {
            let Some(workspace) = select_workspace(&ctx.workspaces, ask).await? else {
                return Ok(Outcome::Cancelled);
            };
            workspace_template_dir(&workspace)
        }
    };

    let name = ask
        .input_text(Some("Enter the name of the new template"), None)
        .await?;
    let Some(name) = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()) else {
        return Ok(Outcome::Cancelled);
    };

    let created = write_new_template(
        ctx.fs.as_ref(),
        &collection_dir,
        &name,
        ctx.bootstrap_template.as_deref(),
    )
    .await?;

    if let Err(e) = ctx.focus.focus(created.path()).await {
        tracing::warn!(path = %created.path().display(), error = %e, "failed to focus template");
    }

    Ok(match created {
        NewTemplate::Created(path) => Outcome::TemplateCreated { path },
        NewTemplate::Exists(path) => Outcome::TemplateExists { path },
    })
}

/// Generates files from a template into `target`.
///
/// # Errors
///
/// - `TargetResolution` if `target` is not inside a configured workspace
/// - `NoTemplatesFound` if neither collection holds a valid template
/// - `WriteConflict` if any planned file already exists
/// - `Render`, `Prompt` or `Io` failures along the way
pub async fn generate_here(
    ctx: &ScaffoldContext,
    ask: &dyn PromptPort,
    target: &Path,
) -> ScaffoldResult<Outcome> {
    let workspace = workspace_for(&ctx.workspaces, target)
        .cloned()
        .ok_or_else(|| {
            ScaffoldError::TargetResolution(format!(
                "{} is not inside an open workspace",
                target.display()
            ))
        })?;

    generate_into(ctx, ask, &workspace, target).await
}

/// Generates files from a template into a directory chosen by the user.
///
/// The workspace is chosen first; the directory prompt starts at its root.
pub async fn generate_in(ctx: &ScaffoldContext, ask: &dyn PromptPort) -> ScaffoldResult<Outcome> {
    let Some(workspace) = select_workspace(&ctx.workspaces, ask).await? else {
        return Ok(Outcome::Cancelled);
    };

    let Some(target) = ask.pick_directory(&workspace).await? else {
        return Ok(Outcome::Cancelled);
    };

    generate_into(ctx, ask, &workspace, &target).await
}

/// The merged catalog for `workspace`, freshly loaded from disk.
pub async fn list_templates(ctx: &ScaffoldContext, workspace: &Path) -> Vec<TemplateDefinition> {
    load_catalog(ctx.fs.as_ref(), &ctx.collection_roots(workspace)).await
}

/// Lets the user choose a template by name.
///
/// Returns `Ok(None)` if the user dismisses the choice.
pub async fn select_template<'a>(
    catalog: &'a [TemplateDefinition],
    ask: &dyn PromptPort,
) -> ScaffoldResult<Option<&'a TemplateDefinition>> {
    let items: Vec<PickItem> = catalog
        .iter()
        .map(|template| PickItem::new(template.label()).with_description(template.description.clone()))
        .collect();

    let picked = ask.pick_one(Some("Select a template"), &items).await?;
    Ok(picked.and_then(|index| catalog.get(index)))
}

async fn generate_into(
    ctx: &ScaffoldContext,
    ask: &dyn PromptPort,
    workspace: &Path,
    target: &Path,
) -> ScaffoldResult<Outcome> {
    let catalog = list_templates(ctx, workspace).await;
    if catalog.is_empty() {
        return Err(ScaffoldError::NoTemplatesFound);
    }

    let Some(template) = select_template(&catalog, ask).await? else {
        return Ok(Outcome::Cancelled);
    };

    let Some(params) = collect(&template.parameters, ask).await? else {
        return Ok(Outcome::Cancelled);
    };
    tracing::debug!(template = %template.name, ?params, "collected parameters");

    let files = build(&ctx.renderer, target, &template.files, &params)?;

    match extract(&files, ctx.fs.as_ref(), ctx.focus.as_ref()).await? {
        Extraction::Written { paths } => Ok(Outcome::FilesWritten {
            count: paths.len(),
            paths,
        }),
        Extraction::Aborted { conflicts } => Err(ScaffoldError::WriteConflict { paths: conflicts }),
    }
}
