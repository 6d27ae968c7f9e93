//! Change record data model

use std::path::{Path, PathBuf};

/// A filesystem entity affected by an upcoming VCS operation.
///
/// Change records are produced by the VCS change-list/diff engine and
/// passed in by the caller; this library only reads the resolved path.
pub trait ChangeRecord {
    /// Absolute path of the affected entity.
    fn resolved_path(&self) -> PathBuf;
}

/// A single workspace change, ready to hand to the save coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceChange {
    /// Absolute path of the affected file
    pub path: PathBuf,

    /// What the VCS operation will do to the file
    pub kind: ChangeKind,
}

impl WorkspaceChange {
    /// Create a change record for `path`.
    pub fn new(path: impl Into<PathBuf>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Get the status indicator character
    pub fn indicator(&self) -> char {
        match &self.kind {
            ChangeKind::Added => 'A',
            ChangeKind::Modified => 'M',
            ChangeKind::Deleted => 'D',
            ChangeKind::Moved { .. } => 'V',
        }
    }
}

impl ChangeRecord for WorkspaceChange {
    fn resolved_path(&self) -> PathBuf {
        self.path.clone()
    }
}

/// Possible operations a VCS action applies to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    /// File will be added
    Added,

    /// File content will be updated
    Modified,

    /// File will be deleted
    Deleted,

    /// File will be moved
    Moved {
        /// Original path
        from: PathBuf,
    },
}

impl ChangeRecord for &Path {
    fn resolved_path(&self) -> PathBuf {
        self.to_path_buf()
    }
}
