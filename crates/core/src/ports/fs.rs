//! Filesystem access used by the locator and the extractor.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One immediate entry of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// File name of the entry.
    pub name: String,
    /// True for regular files.
    pub is_file: bool,
}

#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Returns true if anything (file, directory or link) occupies `path`.
    async fn exists(&self, path: &Path) -> bool;

    async fn is_directory(&self, path: &Path) -> bool;

    /// Lists the immediate entries of `path`, ordered by file name.
    async fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes `content` to `path`, creating missing parent directories.
    async fn write_string(&self, path: &Path, content: &str) -> io::Result<()>;

    async fn remove_file(&self, path: &Path) -> io::Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so that a dangling link still counts as occupied
        tokio::fs::symlink_metadata(path).await.is_ok()
    }

    async fn is_directory(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    async fn list_directory(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        tokio::fs::metadata(path).await?;

        let mut entries = Vec::new();

        for entry in WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            entries.push(DirEntry {
                path: entry.path().to_path_buf(),
                name: entry.file_name().to_string_lossy().into_owned(),
                is_file: entry.file_type().is_file(),
            });
        }

        Ok(entries)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn write_string(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, content).await
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        tokio::fs::remove_file(path).await
    }
}
