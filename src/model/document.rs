//! Open document data model

use std::path::{Path, PathBuf};

/// Identity of an open document, assigned by the registry.
///
/// Selection for saving is keyed by this identity, never by position in
/// a path list, so duplicate target paths cannot select a document twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

/// Snapshot of one open document's persistence state.
///
/// Owned by the host editor's document registry; the coordinator only
/// reads these fields to decide which documents to save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    /// Registry identity of the document
    pub id: DocumentId,

    /// Storage path on disk. `None` for a never-saved document.
    pub path: Option<PathBuf>,

    /// Does the in-memory state differ from the last persisted form?
    pub modified: bool,
}

impl OpenDocument {
    /// The document's storage path, if it has ever been persisted.
    ///
    /// An empty path counts as unset: a never-saved document cannot be
    /// matched against any filesystem path.
    pub fn storage_path(&self) -> Option<&Path> {
        self.path.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}
