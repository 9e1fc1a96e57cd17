//! Status-filtered project list, rendered and droppable.
//!
//! # Responsibility
//! - Mirror the store's snapshot, filtered to one status column.
//! - Accept drag payloads and request the matching status transition.
//!
//! # Invariants
//! - The assigned set is replaced wholesale on every notification; relative
//!   order follows the master sequence, never re-sorted.
//! - The dragged-over visual flag is cleared on leave and after every drop.
//! - List state lives in its own cell, separate from the store, so a
//!   drop-triggered notification never re-borrows the drop target.

use crate::dnd::transfer::{DragTransfer, MEDIA_TYPE_PLAIN_TEXT};
use crate::dnd::DropTarget;
use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::{SharedProjectStore, TransitionOutcome};
use crate::view::project_item::ProjectItemView;
use crate::view::{ViewComponent, ViewNode};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Default)]
struct ListState {
    assigned: Vec<Project>,
    droppable: bool,
}

/// One board column bound to a status filter and the shared store.
pub struct ProjectListView {
    status: ProjectStatus,
    store: SharedProjectStore,
    state: Rc<RefCell<ListState>>,
}

impl ProjectListView {
    /// Builds the view and subscribes it to the store.
    ///
    /// The store does not replay current state at subscription time, so the
    /// assigned set is seeded from a one-off snapshot read.
    pub fn attach(store: &SharedProjectStore, status: ProjectStatus) -> Self {
        let state = Rc::new(RefCell::new(ListState::default()));

        let listener_state = Rc::clone(&state);
        store.borrow_mut().subscribe(move |projects| {
            assign_matching(&mut listener_state.borrow_mut(), projects, status);
        });

        let initial = store.borrow().snapshot();
        assign_matching(&mut state.borrow_mut(), initial, status);

        Self {
            status,
            store: Rc::clone(store),
            state,
        }
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// Upper-cased column heading, e.g. `ACTIVE PROJECTS`.
    pub fn heading(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    /// Current assigned set, in master-sequence order.
    pub fn projects(&self) -> Vec<Project> {
        self.state.borrow().assigned.clone()
    }

    /// Whether a drag is currently hovering with an accepted payload.
    pub fn is_droppable(&self) -> bool {
        self.state.borrow().droppable
    }

    /// Draggable item wrappers for the current assigned set.
    pub fn items(&self) -> Vec<ProjectItemView> {
        self.state
            .borrow()
            .assigned
            .iter()
            .cloned()
            .map(ProjectItemView::new)
            .collect()
    }
}

fn assign_matching(state: &mut ListState, projects: Vec<Project>, status: ProjectStatus) {
    state.assigned = projects
        .into_iter()
        .filter(|project| project.status == status)
        .collect();
}

impl DropTarget for ProjectListView {
    fn drag_over(&mut self, transfer: &DragTransfer) -> bool {
        if transfer.data(MEDIA_TYPE_PLAIN_TEXT).is_none() {
            return false;
        }
        self.state.borrow_mut().droppable = true;
        true
    }

    fn drag_leave(&mut self) {
        self.state.borrow_mut().droppable = false;
    }

    fn on_drop(&mut self, transfer: &DragTransfer) {
        let Some(raw) = transfer.data(MEDIA_TYPE_PLAIN_TEXT) else {
            return;
        };

        match Uuid::parse_str(raw) {
            Ok(id) => {
                let outcome = self.store.borrow_mut().set_status(id, self.status);
                if outcome == TransitionOutcome::UnknownId {
                    warn!(
                        "event=drop_ignored module=view status=warn reason=unknown_id id={} target={}",
                        id,
                        self.status.as_str()
                    );
                }
            }
            Err(_) => {
                warn!(
                    "event=drop_ignored module=view status=warn reason=malformed_payload target={}",
                    self.status.as_str()
                );
            }
        }

        self.state.borrow_mut().droppable = false;
    }
}

impl ViewComponent for ProjectListView {
    fn render(&self) -> ViewNode {
        let mut lines = vec![self.heading()];
        for item in self.items() {
            lines.extend(item.render().lines);
        }
        ViewNode {
            id: format!("{}-projects", self.status.as_str()),
            lines,
        }
    }
}
