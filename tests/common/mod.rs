//! Stub collaborators for save-coordination tests.
//!
//! Every stub appends to one shared [`EventLog`], so tests can assert
//! the exact order of collaborator calls across a coordination pass.

use std::cell::RefCell;
use std::rc::Rc;

use presave::model::{DocumentId, OpenDocument};
use presave::monitor::OperationsMonitor;
use presave::registry::{CollaboratorError, DocumentRegistry, PendingEdits};

/// One collaborator call observed during a coordination pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Disable,
    Enable,
    SaveWithPrompt(Vec<DocumentId>),
    SaveUnconditionally(Vec<DocumentId>),
    Flush,
}

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct EventLog(Rc<RefCell<Vec<Event>>>);

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn last(&self) -> Option<Event> {
        self.0.borrow().last().cloned()
    }

    /// How many logged events match `predicate`.
    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.0.borrow().iter().filter(|e| predicate(e)).count()
    }
}

/// Monitor double that records disable/enable calls.
pub struct StubMonitor {
    log: EventLog,
}

impl StubMonitor {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl OperationsMonitor for StubMonitor {
    fn disable(&self) {
        self.log.push(Event::Disable);
    }

    fn enable(&self) {
        self.log.push(Event::Enable);
    }
}

/// What a registry save primitive should do when invoked.
pub enum SaveBehavior {
    /// Prompt accepted / unconditional save succeeds.
    Proceed,

    /// User declines the prompt. Unconditional saves still succeed.
    Decline,

    /// The save machinery faults.
    Fail(&'static str),

    /// The save machinery panics (unwind-safety coverage).
    Panic(&'static str),
}

/// Registry double with a fixed document list and scripted save behavior.
pub struct StubRegistry {
    log: EventLog,
    docs: Vec<OpenDocument>,
    behavior: SaveBehavior,
}

impl StubRegistry {
    pub fn new(log: EventLog, docs: Vec<OpenDocument>) -> Self {
        Self {
            log,
            docs,
            behavior: SaveBehavior::Proceed,
        }
    }

    pub fn with_behavior(mut self, behavior: SaveBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl DocumentRegistry for StubRegistry {
    fn open_documents(&self) -> Vec<OpenDocument> {
        self.docs.clone()
    }

    fn save_with_prompt(&mut self, docs: &[DocumentId]) -> Result<bool, CollaboratorError> {
        self.log.push(Event::SaveWithPrompt(docs.to_vec()));
        match &self.behavior {
            SaveBehavior::Proceed => Ok(true),
            SaveBehavior::Decline => Ok(false),
            SaveBehavior::Fail(msg) => Err((*msg).into()),
            SaveBehavior::Panic(msg) => panic!("{msg}"),
        }
    }

    fn save_unconditionally(&mut self, docs: &[DocumentId]) -> Result<(), CollaboratorError> {
        self.log.push(Event::SaveUnconditionally(docs.to_vec()));
        match &self.behavior {
            SaveBehavior::Proceed | SaveBehavior::Decline => Ok(()),
            SaveBehavior::Fail(msg) => Err((*msg).into()),
            SaveBehavior::Panic(msg) => panic!("{msg}"),
        }
    }
}

/// Pending-edit double that records flushes and can be made to fault.
pub struct StubPending {
    log: EventLog,
    failure: Option<&'static str>,
}

impl StubPending {
    pub fn new(log: EventLog) -> Self {
        Self { log, failure: None }
    }

    pub fn with_failure(mut self, msg: &'static str) -> Self {
        self.failure = Some(msg);
        self
    }
}

impl PendingEdits for StubPending {
    fn flush(&mut self) -> Result<(), CollaboratorError> {
        self.log.push(Event::Flush);
        match self.failure {
            Some(msg) => Err(msg.into()),
            None => Ok(()),
        }
    }
}

/// Document snapshot shorthand.
pub fn doc(id: u64, path: Option<&str>, modified: bool) -> OpenDocument {
    OpenDocument {
        id: DocumentId(id),
        path: path.map(Into::into),
        modified,
    }
}
