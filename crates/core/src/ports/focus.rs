//! "Focus this file" notification sent after a file is written.

use async_trait::async_trait;
use std::path::Path;

/// Receives requests to bring a freshly written file to the user's attention.
///
/// Failures are reported back but treated as best effort by every caller.
#[async_trait]
pub trait FocusNotifier: Send + Sync {
    async fn focus(&self, path: &Path) -> anyhow::Result<()>;
}

/// Ignores every focus request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFocus;

#[async_trait]
impl FocusNotifier for NoopFocus {
    async fn focus(&self, _path: &Path) -> anyhow::Result<()> {
        Ok(())
    }
}
