//! Embedded bootstrap assets.
//!
//! Files in the crate's `templates/` directory are embedded into the binary at
//! compile time, so creating a new template definition needs no external
//! files. With the `debug-embed` feature they are still embedded in debug
//! builds, keeping tests independent of the working directory.

use rust_embed::RustEmbed;

/// Asset rendered when a new template definition is created.
pub const BOOTSTRAP_TEMPLATE: &str = "new-template.yaml";

/// Embedded files from `crates/core/templates/`.
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates"]
pub struct TemplateAssets;

/// Get an embedded asset by path.
///
/// # Example
/// ```
/// use sk_core::init::templates::get_template;
///
/// let bootstrap = get_template("new-template.yaml").expect("asset should exist");
/// assert!(bootstrap.contains("{{templateName}}"));
/// ```
pub fn get_template(path: &str) -> Option<String> {
    TemplateAssets::get(path).map(|file| String::from_utf8_lossy(file.data.as_ref()).to_string())
}

/// The embedded bootstrap template text.
pub fn bootstrap_template() -> Option<String> {
    get_template(BOOTSTRAP_TEMPLATE)
}
