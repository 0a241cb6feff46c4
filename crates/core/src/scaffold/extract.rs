//! Two-phase, non-clobbering extraction of a file plan.
//!
//! 1. Check: every planned path is tested for existence. If any path is
//!    occupied the extraction aborts and nothing is written.
//! 2. Write: files are written in plan order. A path that became occupied
//!    after the check phase is skipped, never overwritten. If a write fails,
//!    the files written so far are removed again before the error is returned.
//!
//! The two phases are not atomic together. Another process creating a planned
//! file in between causes that file to be skipped; this tool assumes a single
//! user and accepts that window.

use crate::ports::focus::FocusNotifier;
use crate::ports::fs::FileSystem;
use crate::scaffold::error::{ScaffoldError, ScaffoldResult};
use crate::scaffold::plan::RenderedFile;
use std::path::PathBuf;

/// Result of one extraction attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The check phase passed; these files were written, in order.
    Written { paths: Vec<PathBuf> },
    /// These planned paths already existed; nothing was written.
    Aborted { conflicts: Vec<PathBuf> },
}

impl Extraction {
    /// Number of files written.
    pub fn written_count(&self) -> usize {
        match self {
            Extraction::Written { paths } => paths.len(),
            Extraction::Aborted { .. } => 0,
        }
    }
}

/// Checks the plan against the filesystem, then writes it.
///
/// Once every file is written, `focus` is notified for files whose blueprint
/// sets `open`. A failed notification is logged and does not fail the
/// extraction.
///
/// # Errors
///
/// Returns `ScaffoldError::Io` if a write fails. Files written by this call
/// are removed first, so the plan is either fully written or not at all.
pub async fn extract(
    files: &[RenderedFile<'_>],
    fs: &dyn FileSystem,
    focus: &dyn FocusNotifier,
) -> ScaffoldResult<Extraction> {
    let conflicts = find_conflicts(files, fs).await;
    if !conflicts.is_empty() {
        tracing::info!(count = conflicts.len(), "extraction aborted, planned files already exist");
        return Ok(Extraction::Aborted { conflicts });
    }

    let mut written: Vec<&RenderedFile<'_>> = Vec::with_capacity(files.len());

    for file in files {
        if fs.exists(&file.path).await {
            tracing::warn!(path = %file.path.display(), "file appeared after conflict check, skipping");
            continue;
        }

        if let Err(source) = fs.write_string(&file.path, &file.content).await {
            roll_back(&written, fs).await;
            return Err(ScaffoldError::Io {
                path: file.path.clone(),
                source,
            });
        }
        tracing::debug!(path = %file.path.display(), "wrote file");
        written.push(file);
    }

    for file in written.iter().filter(|file| file.blueprint.open) {
        if let Err(e) = focus.focus(&file.path).await {
            tracing::warn!(path = %file.path.display(), error = %e, "failed to focus file");
        }
    }

    Ok(Extraction::Written {
        paths: written.iter().map(|file| file.path.clone()).collect(),
    })
}

/// Removes files written earlier in the same extraction.
///
/// The check phase proved none of them existed before, so nothing of the
/// user's is touched.
async fn roll_back(written: &[&RenderedFile<'_>], fs: &dyn FileSystem) {
    for file in written.iter().rev() {
        match fs.remove_file(&file.path).await {
            Ok(()) => tracing::debug!(path = %file.path.display(), "removed partially extracted file"),
            Err(e) => {
                tracing::warn!(path = %file.path.display(), error = %e, "failed to remove partially extracted file")
            }
        }
    }
}

async fn find_conflicts(files: &[RenderedFile<'_>], fs: &dyn FileSystem) -> Vec<PathBuf> {
    let mut conflicts = Vec::new();
    for file in files {
        if fs.exists(&file.path).await {
            conflicts.push(file.path.clone());
        }
    }
    conflicts
}
