//! Scaffold operations: from a selected template to files on disk.
//!
//! Control flow of a generate operation:
//! locate collections → merge → select template → [`params::collect`] →
//! [`plan::build`] → [`extract::extract`].

pub mod error;
pub mod extract;
pub mod operations;
pub mod params;
pub mod plan;
pub mod workspace;

pub use error::{ScaffoldError, ScaffoldResult};
pub use extract::Extraction;
pub use operations::{
    create_template, create_user_template, create_workspace_template, generate_here, generate_in,
    list_templates, run, select_template, ScaffoldContext,
};
pub use plan::RenderedFile;
