//! Custom assertion helpers for scaffold tests.

use sk_protocol::ipc::Outcome;
use std::path::Path;

/// Assert that a file exists with exactly the given content.
pub fn assert_file_content(path: &Path, expected: &str) {
    let actual = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Expected file {} to exist: {e}", path.display()));
    assert_eq!(actual, expected, "Unexpected content in {}", path.display());
}

/// Assert that the directory holds no entries other than `allowed`.
pub fn assert_only_entries(dir: &Path, allowed: &[&str]) {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", dir.display()))
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    let mut expected: Vec<String> = allowed.iter().map(|s| s.to_string()).collect();
    expected.sort();

    assert_eq!(names, expected, "Unexpected entries in {}", dir.display());
}

/// Assert that an outcome reports exactly `count` written files.
pub fn assert_files_written(outcome: &Outcome, count: usize) {
    match outcome {
        Outcome::FilesWritten { count: written, paths } => {
            assert_eq!(*written, count, "written count");
            assert_eq!(paths.len(), count, "written paths");
        }
        other => panic!("Expected FilesWritten, got {other:?}"),
    }
}
