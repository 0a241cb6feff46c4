//! Command-line host for scaffold-kit.
//!
//! Wires the terminal prompt and editor focus into the scaffold operations.

mod focus;
mod prompt;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{bail, Result, WrapErr};
use colored::Colorize;
use focus::EditorFocus;
use prompt::TerminalPrompt;
use sk_core::config::loader::load_config;
use sk_core::scaffold::{list_templates, run, ScaffoldContext};
use sk_protocol::ipc::{Op, Outcome, Scope};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SCAFFOLD_LOG";

#[derive(Debug, Parser)]
#[command(
    name = "scaffold",
    version,
    about = "Generate files from user and workspace templates"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Workspace root. Repeat for several workspaces [default: current directory]
    #[arg(long = "workspace", short = 'w', global = true, value_name = "DIR")]
    workspaces: Vec<PathBuf>,

    /// Root of the user template collection
    #[arg(long, global = true, env = "SCAFFOLD_USER_DIR", value_name = "DIR")]
    user_dir: Option<PathBuf>,

    /// Open focused files in $VISUAL or $EDITOR
    #[arg(long, global = true)]
    open: bool,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a new template definition
    NewTemplate {
        /// Collection the definition is written to
        #[arg(long, value_enum, default_value = "user")]
        scope: ScopeArg,
    },

    /// Generate files from a template
    ///
    /// Without TARGET the workspace and directory are asked for.
    Generate {
        /// Directory the files are generated into
        target: Option<PathBuf>,
    },

    /// List the templates available in the first workspace
    List {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    User,
    Workspace,
}

impl From<ScopeArg> for Scope {
    fn from(scope: ScopeArg) -> Self {
        match scope {
            ScopeArg::User => Scope::User,
            ScopeArg::Workspace => Scope::Workspace,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let workspaces = resolve_workspaces(&cli.workspaces)?;
    let Some(root) = workspaces.first().cloned() else {
        bail!("No workspace opened");
    };

    let config = load_config(&root, cli.user_dir.as_deref())
        .await
        .wrap_err("Failed to load configuration")?;
    tracing::debug!(user_dir = %config.user_template_dir.display(), "configuration loaded");

    let ctx = ScaffoldContext::from_config(config, workspaces)
        .with_focus(Arc::new(EditorFocus::new(cli.open)));

    let op = match cli.command {
        Command::List { json } => return print_catalog(&ctx, &root, json).await,
        Command::NewTemplate { scope } => Op::CreateTemplate {
            scope: scope.into(),
        },
        Command::Generate { target: Some(target) } => Op::GenerateHere {
            target: absolute(&target)?,
        },
        Command::Generate { target: None } => Op::GenerateIn,
    };

    match run(&ctx, &TerminalPrompt, &op).await {
        Ok(outcome) => {
            print_outcome(&outcome);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Canonical workspace roots; the current directory when none are given.
fn resolve_workspaces(workspaces: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if workspaces.is_empty() {
        let cwd = std::env::current_dir().wrap_err("Failed to read the current directory")?;
        return Ok(vec![cwd.canonicalize().unwrap_or(cwd)]);
    }

    workspaces
        .iter()
        .map(|workspace| {
            workspace
                .canonicalize()
                .wrap_err_with(|| format!("Workspace not found: {}", workspace.display()))
        })
        .collect()
}

/// Absolute form of `path`; canonical when it already exists.
fn absolute(path: &Path) -> Result<PathBuf> {
    if let Ok(canonical) = path.canonicalize() {
        return Ok(canonical);
    }
    let cwd = std::env::current_dir().wrap_err("Failed to read the current directory")?;
    Ok(cwd.join(path))
}

async fn print_catalog(ctx: &ScaffoldContext, workspace: &Path, json: bool) -> Result<()> {
    let catalog = list_templates(ctx, workspace).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("{}", "No template found".yellow());
        return Ok(());
    }

    for template in &catalog {
        match &template.description {
            Some(description) => println!("{}  {}", template.label().bold(), description.dimmed()),
            None => println!("{}", template.label().bold()),
        }
    }
    Ok(())
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::FilesWritten { count, paths } => {
            println!("{} {count} file(s)", "Created".green().bold());
            for path in paths {
                println!("  {}", path.display());
            }
        }
        Outcome::TemplateCreated { path } => {
            println!("{} {}", "Created template".green().bold(), path.display());
        }
        Outcome::TemplateExists { path } => {
            println!("{} {}", "Template already exists:".yellow().bold(), path.display());
        }
        Outcome::Cancelled => {}
    }
}
