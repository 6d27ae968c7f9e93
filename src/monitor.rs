//! Pausable filesystem-operations monitor boundary
//!
//! The host editor watches the workspace for external file changes.
//! While this library saves documents programmatically, that watcher
//! must be paused or it would treat the saves as externally-originated
//! edits and feed them back into the change pipeline.

/// A pausable filesystem-change observer.
///
/// `&self` receivers: a watcher toggles its own interior state, and the
/// suspension guard only holds a shared borrow. Calls are expected on a
/// single thread; overlapping coordination calls against one monitor
/// are a caller error.
pub trait OperationsMonitor {
    /// Stop reacting to filesystem events.
    fn disable(&self);

    /// Resume reacting to filesystem events.
    fn enable(&self);
}

impl<M: OperationsMonitor + ?Sized> OperationsMonitor for &M {
    fn disable(&self) {
        (**self).disable()
    }

    fn enable(&self) {
        (**self).enable()
    }
}

/// Suspend the monitor for the lifetime of the returned guard.
///
/// Disables immediately and returns a scope guard that re-enables on
/// drop, so the monitor resumes on every exit path (early return, error
/// propagation, panic unwinding).
pub fn suspend<M: OperationsMonitor>(monitor: &M) -> impl Drop + '_ {
    monitor.disable();
    scopeguard::guard(monitor, |m| m.enable())
}
