//! Resolved configuration for one scaffold-kit session.

use sk_protocol::config_models::GlobalConfig;
use std::path::PathBuf;

/// Configuration after loading `config.toml` and resolving collection roots.
///
/// # Example
///
/// ```rust,no_run
/// use sk_core::config::loader::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("."), None).await?;
/// println!("User templates live in {}", config.user_template_dir.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Settings from `config.toml`.
    pub global: GlobalConfig,

    /// Root of the user-scope template collection.
    pub user_template_dir: PathBuf,

    /// Text used to create new template definitions, when overridden.
    ///
    /// `None` means the embedded bootstrap template is used.
    pub bootstrap_template: Option<String>,
}
