//! Configuration loading and management.
//!
//! This module loads the project settings from `.scaffold-kit/config.toml`
//! and resolves where the user and workspace template collections live.

pub mod error;
pub mod loader;
pub mod models;
