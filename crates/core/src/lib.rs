//! # sk-core
//!
//! Template resolution and safe extraction engine for scaffold-kit.
//!
//! This crate provides:
//! - Configuration loading from the `.scaffold-kit/` directory
//! - Validation of template definition documents
//! - Discovery and merging of user and workspace template collections
//! - Parameter collection through an abstract prompt
//! - Rendering and non-clobbering extraction of files
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading and collection roots
//! - [`template`]: Schema validation, rendering, location and merging
//! - [`scaffold`]: Parameter collection, file plans, extraction and operations
//! - [`init`]: Creating new template definitions from the bootstrap asset
//! - [`ports`]: Filesystem, prompt and focus interfaces

pub mod config;
pub mod init;
pub mod ports;
pub mod scaffold;
pub mod template;
