//! Render-model views over store snapshots.
//!
//! # Responsibility
//! - Turn store snapshots into host-agnostic render nodes.
//! - Expose the list surfaces as drop targets of the drag protocol.
//!
//! # Invariants
//! - Views only ever hold cloned project data; writes go through the
//!   shared store handle.

pub mod project_item;
pub mod project_list;

/// Host-agnostic render output of one view.
///
/// The embedding shell decides how lines become widgets/elements; core
/// only guarantees content and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    /// Stable element id, mirroring the project id or list slug.
    pub id: String,
    /// Rendered text content, top to bottom.
    pub lines: Vec<String>,
}

/// Capability implemented by every renderable component.
///
/// A composable seam instead of a base-class hierarchy: each concrete view
/// renders on demand and the host attaches the result wherever it likes.
pub trait ViewComponent {
    fn render(&self) -> ViewNode;
}
