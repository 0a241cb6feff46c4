//! Creating new template definitions.
//!
//! A new definition is produced by rendering a bootstrap template (embedded in
//! the binary, or supplied through configuration) with the chosen template
//! name, and writing it as `<collection>/<name>.yaml`.
//!
//! # Example
//!
//! ```no_run
//! use sk_core::init::{write_new_template, NewTemplate};
//! use sk_core::ports::LocalFileSystem;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let created = write_new_template(
//!     &LocalFileSystem,
//!     Path::new(".scaffold-kit/templates"),
//!     "Component",
//!     None,
//! )
//! .await?;
//! if let NewTemplate::Created(path) = created {
//!     println!("Created {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;
pub mod templates;

// Re-export commonly used types for convenience
pub use error::{InitError, InitResult};
pub use generator::{write_new_template, NewTemplate};
pub use templates::{bootstrap_template, get_template, BOOTSTRAP_TEMPLATE};
