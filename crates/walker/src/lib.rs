//! Recursive traversal of the source root.
//!
//! [`SourceWalk::open`] validates the root up front; that is the only failure
//! the driver treats as fatal. Once open, the walk yields every regular file
//! below the root in a deterministic order (entries sorted by file name).
//! Errors on individual entries further down are yielded as items so the
//! caller can log them and carry on.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Errors from walking the source tree.
#[derive(Debug, thiserror::Error)]
pub enum WalkerError {
    #[error("Source root does not exist: {}", .0.display())]
    RootMissing(PathBuf),
    #[error("Source root is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),
    #[error("Source root cannot be listed: {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl WalkerError {
    /// Path the error refers to, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WalkerError::RootMissing(p) | WalkerError::RootNotDirectory(p) => Some(p),
            WalkerError::RootUnreadable { path, .. } => Some(path),
            WalkerError::Walk(e) => e.path(),
        }
    }
}

/// Lazy iterator over the regular files below a validated root.
///
/// Directory symlinks are not followed; file symlinks that resolve to a
/// regular file are yielded.
pub struct SourceWalk {
    entries: walkdir::IntoIter,
}

impl SourceWalk {
    /// Checks that `root` exists, is a directory and can be listed, then
    /// starts the walk.
    pub fn open(root: &Path) -> Result<Self, WalkerError> {
        let meta = fs::metadata(root).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                WalkerError::RootMissing(root.to_path_buf())
            } else {
                WalkerError::RootUnreadable {
                    path: root.to_path_buf(),
                    source,
                }
            }
        })?;
        if !meta.is_dir() {
            return Err(WalkerError::RootNotDirectory(root.to_path_buf()));
        }
        fs::read_dir(root).map_err(|source| WalkerError::RootUnreadable {
            path: root.to_path_buf(),
            source,
        })?;

        let entries = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter();

        Ok(Self { entries })
    }
}

impl Iterator for SourceWalk {
    type Item = Result<PathBuf, WalkerError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.entries.next()? {
                Ok(entry) => {
                    if entry.file_type().is_dir() {
                        continue;
                    }
                    if entry.path().is_file() {
                        return Some(Ok(entry.into_path()));
                    }
                }
                Err(e) => return Some(Err(WalkerError::Walk(e))),
            }
        }
    }
}
