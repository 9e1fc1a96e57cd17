//! Drag-transfer protocol for moving projects between lists.
//!
//! # Responsibility
//! - Define the seam contracts between drag sources and drop surfaces.
//! - Model one drag gesture as an explicit state machine.
//!
//! # Invariants
//! - A cancelled gesture performs no store mutation.
//! - The payload travels only inside the gesture's [`transfer::DragTransfer`];
//!   sources and targets never talk to each other directly.

pub mod gesture;
pub mod transfer;

use transfer::DragTransfer;

/// Contract for a list item that can start a drag gesture.
pub trait Draggable {
    /// Attaches this item's payload to the gesture transfer.
    fn drag_start(&self, transfer: &mut DragTransfer);

    /// Cleanup hook when the gesture ends, dropped or cancelled.
    fn drag_end(&self) {}
}

/// Contract for a surface that can accept a dropped payload.
pub trait DropTarget {
    /// Signals whether this surface accepts the in-flight payload.
    ///
    /// Returning `true` is the acceptance signal; it may also raise a
    /// transient dragged-over visual state on the surface.
    fn drag_over(&mut self, transfer: &DragTransfer) -> bool;

    /// Clears any dragged-over visual state.
    fn drag_leave(&mut self);

    /// Consumes the payload of a gesture released over this surface.
    fn on_drop(&mut self, transfer: &DragTransfer);
}
