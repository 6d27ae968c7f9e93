//! Domain models
//!
//! Data types shared across the library: change records produced by the
//! VCS layer and snapshots of open documents owned by the host editor.

mod change;
mod document;

pub use change::{ChangeKind, ChangeRecord, WorkspaceChange};
pub use document::{DocumentId, OpenDocument};
