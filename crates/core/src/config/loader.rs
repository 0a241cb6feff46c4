//! Configuration loader for the `.scaffold-kit/` directory.
//!
//! Layout of a workspace:
//! ```text
//! <workspace>/.scaffold-kit/
//! ├── config.toml        (optional)
//! └── templates/         (workspace template collection)
//! ```

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::AppConfig;
use sk_protocol::config_models::GlobalConfig;
use std::path::{Path, PathBuf};

/// Name of the per-workspace settings directory.
pub const SETTINGS_DIR: &str = ".scaffold-kit";

/// Name of a template collection directory.
pub const TEMPLATES_DIR: &str = "templates";

/// Application name used under the platform config directory.
pub const APP_DIR: &str = "scaffold-kit";

/// Loads configuration for the workspace at `root`.
///
/// The user collection root is, in priority order: `user_dir_override`,
/// `user_template_dir` from `config.toml`, then
/// `<platform config dir>/scaffold-kit/templates`.
///
/// A missing `.scaffold-kit/` directory or `config.toml` gives the default
/// configuration rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - `config.toml` or the configured bootstrap template exists but cannot be read
/// - `config.toml` has invalid syntax
/// - no user collection root can be determined
pub async fn load_config(root: &Path, user_dir_override: Option<&Path>) -> ConfigResult<AppConfig> {
    let global = load_global_config(root)?;

    let user_template_dir = match (user_dir_override, &global.user_template_dir) {
        (Some(dir), _) => dir.to_path_buf(),
        (None, Some(dir)) => resolve(root, dir),
        (None, None) => default_user_template_dir().ok_or(ConfigError::UserDirUnavailable)?,
    };

    let bootstrap_template = match &global.bootstrap_template {
        Some(path) => {
            let path = resolve(root, path);
            let content = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::FileRead { path, source })?;
            Some(content)
        }
        None => None,
    };

    Ok(AppConfig {
        global,
        user_template_dir,
        bootstrap_template,
    })
}

/// Loads global configuration from `.scaffold-kit/config.toml`.
fn load_global_config(root: &Path) -> ConfigResult<GlobalConfig> {
    let config_path = root.join(SETTINGS_DIR).join("config.toml");

    if !config_path.exists() {
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.clone(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path,
            source,
        })?;

    Ok(config)
}

/// Workspace-scope collection root: `<workspace>/.scaffold-kit/templates`.
pub fn workspace_template_dir(workspace: &Path) -> PathBuf {
    workspace.join(SETTINGS_DIR).join(TEMPLATES_DIR)
}

/// Platform default user-scope collection root.
pub fn default_user_template_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(TEMPLATES_DIR))
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
