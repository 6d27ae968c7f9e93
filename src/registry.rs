//! Document registry and pending-edit boundaries
//!
//! The host editor owns the open documents and the machinery that
//! persists them; this library drives that machinery through the narrow
//! traits below. Faults raised here are relayed upward untouched.

use crate::model::{DocumentId, OpenDocument};

/// A fault raised by a collaborator (registry save, pending-edit flush).
///
/// The coordinator never constructs or inspects these; it only
/// guarantees the operations monitor is re-enabled before relaying them.
pub type CollaboratorError = Box<dyn std::error::Error + Send + Sync>;

/// Enumerates open documents and persists selected ones.
pub trait DocumentRegistry {
    /// Snapshot of every currently open document.
    fn open_documents(&self) -> Vec<OpenDocument>;

    /// Save the given documents after asking the user.
    ///
    /// Returns `Ok(false)` when the user declined; `Err` only when the
    /// save machinery itself faulted.
    fn save_with_prompt(&mut self, docs: &[DocumentId]) -> Result<bool, CollaboratorError>;

    /// Save the given documents without asking.
    fn save_unconditionally(&mut self, docs: &[DocumentId]) -> Result<(), CollaboratorError>;
}

impl<R: DocumentRegistry + ?Sized> DocumentRegistry for &mut R {
    fn open_documents(&self) -> Vec<OpenDocument> {
        (**self).open_documents()
    }

    fn save_with_prompt(&mut self, docs: &[DocumentId]) -> Result<bool, CollaboratorError> {
        (**self).save_with_prompt(docs)
    }

    fn save_unconditionally(&mut self, docs: &[DocumentId]) -> Result<(), CollaboratorError> {
        (**self).save_unconditionally(docs)
    }
}

/// Commits outstanding non-document edits (other in-memory asset state)
/// to durable storage.
pub trait PendingEdits {
    /// Flush everything pending. Idempotent.
    fn flush(&mut self) -> Result<(), CollaboratorError>;
}

impl<E: PendingEdits + ?Sized> PendingEdits for &mut E {
    fn flush(&mut self) -> Result<(), CollaboratorError> {
        (**self).flush()
    }
}
