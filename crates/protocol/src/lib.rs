//! # sk-protocol
//!
//! Data models shared by every scaffold-kit consumer.
//!
//! This crate defines the plain structures used for:
//! - Template definition documents (`*.yaml`, `*.yml`, `*.json`)
//! - Project configuration (`.scaffold-kit/config.toml`)
//! - The operation surface exposed to hosts and the outcome of each operation
//!
//! ## Modules
//!
//! - [`template_models`]: Template definitions, parameters and file blueprints
//! - [`config_models`]: Global configuration from config.toml
//! - [`ipc`]: Operations a host can request and the outcomes it receives
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and ts-rs
//! - TypeScript generation: All types derive `TS` so editor hosts share the shapes
//! - Independent compilation: No dependencies on other scaffold-kit crates

pub mod config_models;
pub mod ipc;
pub mod template_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use ipc::*;
pub use template_models::*;
