//! Merging template collections into the selectable catalog.

use crate::ports::fs::FileSystem;
use crate::template::locator::locate;
use sk_protocol::template_models::TemplateDefinition;
use std::path::PathBuf;

/// Concatenates collections, keeping each collection's order and the order of
/// the collections themselves.
///
/// Definitions sharing a `name` are all kept as distinct entries.
///
/// # Example
///
/// ```
/// use sk_core::template::catalog::merge;
/// use sk_protocol::TemplateDefinition;
///
/// let def = |name: &str| TemplateDefinition {
///     name: name.to_string(),
///     description: None,
///     parameters: vec![],
///     files: vec![],
/// };
///
/// let merged = merge(vec![vec![def("d1")], vec![def("d2"), def("d3")]]);
/// let names: Vec<_> = merged.iter().map(|d| d.name.as_str()).collect();
/// assert_eq!(names, ["d1", "d2", "d3"]);
/// ```
pub fn merge<I>(collections: I) -> Vec<TemplateDefinition>
where
    I: IntoIterator<Item = Vec<TemplateDefinition>>,
{
    collections.into_iter().flatten().collect()
}

/// Locates every root in order and merges the results.
///
/// The catalog is rebuilt from disk on every call; nothing is cached.
pub async fn load_catalog(fs: &dyn FileSystem, roots: &[PathBuf]) -> Vec<TemplateDefinition> {
    let mut collections = Vec::with_capacity(roots.len());
    for root in roots {
        collections.push(locate(fs, root).await);
    }
    merge(collections)
}
