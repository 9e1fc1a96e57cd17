//! In-memory project store with subscription fan-out.
//!
//! # Responsibility
//! - Own the ordered project sequence for one session.
//! - Run every registered listener synchronously after each mutation.
//!
//! # Invariants
//! - Insertion order is preserved; a status change never reorders the
//!   master sequence.
//! - Every listener receives its own clone of the full sequence, so no
//!   listener can reach store internals through the snapshot.
//! - A mutation that changes nothing (unknown id, unchanged status) fires
//!   no notification.
//! - Listeners must not call back into the store while a notification is
//!   running; the shared `RefCell` would trap the re-entrant borrow.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

/// Change listener invoked with a defensive snapshot of all projects.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Shared handle to one store instance.
///
/// The store is constructed once per session and passed explicitly to the
/// input form and every list view. The board is single-threaded and driven
/// by one event loop, so `Rc<RefCell<_>>` is the whole sharing story.
pub type SharedProjectStore = Rc<RefCell<ProjectStore>>;

/// Result of one status-transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Project found and moved to the requested column; listeners ran.
    Moved,
    /// Project already had the requested status; nothing changed.
    StatusUnchanged,
    /// No project with the requested id exists; nothing changed.
    UnknownId,
}

/// Single owner of all project records plus the listener registry.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already wrapped in the shared session handle.
    pub fn shared() -> SharedProjectStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers one change listener.
    ///
    /// # Contract
    /// - Listeners run synchronously, in registration order, after every
    ///   mutating operation. Registration order is never re-sorted and
    ///   duplicates are not collapsed.
    /// - The listener is not invoked at subscription time; callers that
    ///   need the current state should read [`ProjectStore::snapshot`].
    /// - There is no isolation between listeners: a panicking listener
    ///   unwinds out of the mutating call and the remaining listeners are
    ///   not run for that notification.
    pub fn subscribe(&mut self, listener: impl FnMut(Vec<Project>) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a new project and notifies all listeners.
    ///
    /// # Contract
    /// - Status starts as [`ProjectStatus::Active`].
    /// - Inputs are assumed pre-validated by the input form; the store
    ///   performs no validation and this operation never fails.
    /// - Returns the freshly generated project id.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.push(project);
        info!(
            "event=project_created module=store status=ok id={} people={} total={}",
            id,
            people,
            self.projects.len()
        );
        self.notify_listeners();
        id
    }

    /// Requests a status transition for one project.
    ///
    /// Listeners are notified only when the status actually changed. An
    /// unknown id is reported through the outcome instead of an error so
    /// drop handling stays infallible; callers decide whether to log it.
    pub fn set_status(&mut self, id: ProjectId, status: ProjectStatus) -> TransitionOutcome {
        let Some(project) = self.projects.iter_mut().find(|project| project.id == id) else {
            return TransitionOutcome::UnknownId;
        };
        if project.status == status {
            return TransitionOutcome::StatusUnchanged;
        }

        let previous = project.status;
        project.status = status;
        info!(
            "event=project_moved module=store status=ok id={} from={} to={}",
            id,
            previous.as_str(),
            status.as_str()
        );
        self.notify_listeners();
        TransitionOutcome::Moved
    }

    /// Returns a defensive copy of the current project sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Returns a clone of one project by id.
    pub fn project(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|project| project.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Returns how many listeners are registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_listeners(&mut self) {
        for listener in &mut self.listeners {
            listener(self.projects.clone());
        }
    }
}
