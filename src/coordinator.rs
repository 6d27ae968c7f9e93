//! Save coordination for VCS snapshots
//!
//! Before a version-control operation captures the workspace, modified
//! open documents matching the affected paths must be persisted and
//! pending in-memory edits flushed, all while the filesystem-operations
//! monitor is suspended. This module sequences that window: suspend,
//! select, save (with or without the user's confirmation), flush,
//! resume. The monitor resumes on every exit path.

use std::path::PathBuf;

use log::{debug, trace};
use thiserror::Error;

use crate::model::{ChangeRecord, DocumentId, OpenDocument};
use crate::monitor::{self, OperationsMonitor};
use crate::paths::PathEquality;
use crate::registry::{CollaboratorError, DocumentRegistry, PendingEdits};

/// Result of one coordination call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Matching documents (possibly none) were saved and pending edits
    /// were flushed.
    Completed,

    /// The user declined the confirmation prompt. Nothing was saved and
    /// the pending-edit flush was skipped.
    Cancelled,
}

impl SaveOutcome {
    /// Did the user abort the sequence?
    pub fn is_cancelled(self) -> bool {
        matches!(self, SaveOutcome::Cancelled)
    }
}

/// A collaborator fault relayed out of a coordination call.
///
/// The monitor has always been re-enabled by the time one of these
/// reaches the caller. Cancellation is never an error; it travels
/// through [`SaveOutcome`].
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("document save failed: {0}")]
    Save(#[source] CollaboratorError),

    #[error("pending-edit flush failed: {0}")]
    Flush(#[source] CollaboratorError),
}

/// Confirmation mode for one coordination call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Confirm {
    Ask,
    Force,
}

/// Orchestrates the pre-snapshot save pass.
///
/// Stateless between calls: all state lives in the injected
/// collaborators. Blanket impls on the collaborator traits let callers
/// inject `&`/`&mut` borrows instead of owned values.
#[derive(Debug)]
pub struct SaveCoordinator<R, P, E, M> {
    registry: R,
    path_eq: P,
    pending: E,
    monitor: M,
}

impl<R, P, E, M> SaveCoordinator<R, P, E, M>
where
    R: DocumentRegistry,
    P: PathEquality,
    E: PendingEdits,
    M: OperationsMonitor,
{
    /// Create a coordinator over the host's collaborators.
    pub fn new(registry: R, path_eq: P, pending: E, monitor: M) -> Self {
        Self {
            registry,
            path_eq,
            pending,
            monitor,
        }
    }

    /// Save modified documents affected by `changes`, asking the user
    /// first.
    pub fn save_changes_with_confirmation(
        &mut self,
        changes: &[impl ChangeRecord],
    ) -> Result<SaveOutcome, SaveError> {
        self.save_for_paths(&resolve_paths(changes), Confirm::Ask)
    }

    /// Save modified documents stored at `paths`, asking the user first.
    pub fn save_paths_with_confirmation(
        &mut self,
        paths: &[PathBuf],
    ) -> Result<SaveOutcome, SaveError> {
        debug_assert!(paths.iter().all(|p| !p.as_os_str().is_empty()));
        self.save_for_paths(paths, Confirm::Ask)
    }

    /// Save modified documents affected by `changes` without asking.
    ///
    /// Never reports [`SaveOutcome::Cancelled`].
    pub fn save_changes_without_confirmation(
        &mut self,
        changes: &[impl ChangeRecord],
    ) -> Result<SaveOutcome, SaveError> {
        self.save_for_paths(&resolve_paths(changes), Confirm::Force)
    }

    /// Save modified documents stored at `paths` without asking.
    ///
    /// Never reports [`SaveOutcome::Cancelled`].
    pub fn save_paths_without_confirmation(
        &mut self,
        paths: &[PathBuf],
    ) -> Result<SaveOutcome, SaveError> {
        debug_assert!(paths.iter().all(|p| !p.as_os_str().is_empty()));
        self.save_for_paths(paths, Confirm::Force)
    }

    /// The single routine behind the four entry points.
    ///
    /// Runs entirely under the monitor-suspension guard: the monitor is
    /// disabled before documents are enumerated and re-enabled when the
    /// guard drops, whether the body completes, returns early on
    /// cancellation, or propagates a collaborator fault.
    fn save_for_paths(
        &mut self,
        targets: &[PathBuf],
        confirm: Confirm,
    ) -> Result<SaveOutcome, SaveError> {
        let _monitor_paused = monitor::suspend(&self.monitor);
        debug!("save pass over {} target path(s)", targets.len());

        let outcome =
            Self::save_matching_documents(&mut self.registry, &self.path_eq, targets, confirm)?;

        if outcome.is_cancelled() {
            debug!("user declined; pending edits left unflushed");
            return Ok(outcome);
        }

        self.pending.flush().map_err(SaveError::Flush)?;
        Ok(SaveOutcome::Completed)
    }

    fn save_matching_documents(
        registry: &mut R,
        path_eq: &P,
        targets: &[PathBuf],
        confirm: Confirm,
    ) -> Result<SaveOutcome, SaveError> {
        let selected = select_documents(&registry.open_documents(), path_eq, targets);

        if selected.is_empty() {
            return Ok(SaveOutcome::Completed);
        }
        debug!("{} modified document(s) match the targets", selected.len());

        match confirm {
            Confirm::Ask => {
                let proceeded = registry
                    .save_with_prompt(&selected)
                    .map_err(SaveError::Save)?;
                Ok(if proceeded {
                    SaveOutcome::Completed
                } else {
                    SaveOutcome::Cancelled
                })
            }
            Confirm::Force => {
                registry
                    .save_unconditionally(&selected)
                    .map_err(SaveError::Save)?;
                Ok(SaveOutcome::Completed)
            }
        }
    }
}

/// Modified documents whose storage path matches one of `targets`.
///
/// Iterates documents, not targets, so a document appears at most once
/// however many duplicate targets name it. Documents without a storage
/// path can never match.
fn select_documents<P: PathEquality>(
    docs: &[OpenDocument],
    path_eq: &P,
    targets: &[PathBuf],
) -> Vec<DocumentId> {
    docs.iter()
        .filter(|doc| doc.modified)
        .filter(|doc| match doc.storage_path() {
            Some(stored) => targets.iter().any(|t| path_eq.is_same_path(t, stored)),
            None => false,
        })
        .inspect(|doc| trace!("selected {:?}", doc.id))
        .map(|doc| doc.id)
        .collect()
}

fn resolve_paths(changes: &[impl ChangeRecord]) -> Vec<PathBuf> {
    changes.iter().map(|c| c.resolved_path()).collect()
}
