//! Common test utilities and helpers for scaffold integration tests.
//!
//! This module provides shared functionality across the integration tests:
//! - Test fixtures (temporary workspaces, template documents)
//! - Custom assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
