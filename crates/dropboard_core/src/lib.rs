//! Core logic for the Dropboard project board.
//! This crate is the single source of truth for board state and invariants.

pub mod dnd;
pub mod input;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use dnd::gesture::{DragGesture, DragPhase, DragStateError};
pub use dnd::transfer::{DragTransfer, DropEffect, MEDIA_TYPE_PLAIN_TEXT};
pub use dnd::{Draggable, DropTarget};
pub use input::project_form::{ProjectForm, DESCRIPTION_MIN_LENGTH, PEOPLE_MAX, PEOPLE_MIN};
pub use input::validation::ValidationError;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    parse_project_status, Project, ProjectId, ProjectStatus, ProjectValidationError,
    StatusParseError,
};
pub use store::project_store::{Listener, ProjectStore, SharedProjectStore, TransitionOutcome};
pub use view::project_item::ProjectItemView;
pub use view::project_list::ProjectListView;
pub use view::{ViewComponent, ViewNode};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
