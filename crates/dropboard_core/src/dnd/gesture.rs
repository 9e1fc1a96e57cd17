//! Drag gesture state machine.
//!
//! # Responsibility
//! - Track one gesture through idle/dragging/over-target phases.
//! - Route payload and visual-state calls to sources and surfaces in a
//!   legal order.
//!
//! # Invariants
//! - The payload is attached exactly once, at `begin`.
//! - A target's dragged-over visual state is cleared on leave and on drop,
//!   whatever the drop outcome.
//! - `cancel` and a rejected drop leave the store untouched.

use crate::dnd::transfer::{DragTransfer, DropEffect};
use crate::dnd::{Draggable, DropTarget};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Phase of one drag gesture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DragPhase {
    /// No gesture in flight.
    #[default]
    Idle,
    /// Pointer moving with a payload attached, not over any surface.
    Dragging,
    /// Payload hovering over a surface that signalled acceptance.
    OverTarget,
}

/// Out-of-order gesture transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStateError {
    /// `begin` called while a gesture is already in flight.
    AlreadyDragging,
    /// A dragging-only transition was requested from `Idle`.
    NotDragging,
    /// `drop_on` or `leave_target` called without an accepting surface.
    NotOverTarget,
    /// `enter_target` called while still over another surface.
    AlreadyOverTarget,
}

impl Display for DragStateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyDragging => write!(f, "drag gesture is already in flight"),
            Self::NotDragging => write!(f, "no drag gesture is in flight"),
            Self::NotOverTarget => write!(f, "drag gesture is not over an accepting surface"),
            Self::AlreadyOverTarget => {
                write!(f, "drag gesture is still over a surface; leave it first")
            }
        }
    }
}

impl Error for DragStateError {}

/// One pointer gesture carrying a payload from a source item to a surface.
///
/// Sources and surfaces are passed per call instead of being stored, so
/// the gesture never holds borrows across host event-loop turns.
#[derive(Debug, Default)]
pub struct DragGesture {
    phase: DragPhase,
    transfer: DragTransfer,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Read-only view of the in-flight payload, mainly for assertions.
    pub fn transfer(&self) -> &DragTransfer {
        &self.transfer
    }

    /// Starts the gesture on one source item.
    ///
    /// The item attaches its payload and the gesture is marked as a move
    /// operation.
    pub fn begin(&mut self, item: &dyn Draggable) -> Result<(), DragStateError> {
        if self.phase != DragPhase::Idle {
            return Err(DragStateError::AlreadyDragging);
        }

        self.transfer.clear();
        item.drag_start(&mut self.transfer);
        self.transfer.set_effect(DropEffect::Move);
        self.phase = DragPhase::Dragging;
        Ok(())
    }

    /// Moves the gesture over one surface.
    ///
    /// Returns whether the surface accepted the payload; a rejecting
    /// surface leaves the gesture in the plain dragging phase. A gesture
    /// still over another surface must go through
    /// [`DragGesture::leave_target`] first, so that surface's visual state
    /// is never left dangling.
    pub fn enter_target(&mut self, target: &mut dyn DropTarget) -> Result<bool, DragStateError> {
        match self.phase {
            DragPhase::Idle => return Err(DragStateError::NotDragging),
            DragPhase::OverTarget => return Err(DragStateError::AlreadyOverTarget),
            DragPhase::Dragging => {}
        }

        let accepted = target.drag_over(&self.transfer);
        self.phase = if accepted {
            DragPhase::OverTarget
        } else {
            DragPhase::Dragging
        };
        Ok(accepted)
    }

    /// Moves the gesture off the current surface, clearing its visual state.
    pub fn leave_target(&mut self, target: &mut dyn DropTarget) -> Result<(), DragStateError> {
        if self.phase != DragPhase::OverTarget {
            return Err(DragStateError::NotOverTarget);
        }

        target.drag_leave();
        self.phase = DragPhase::Dragging;
        Ok(())
    }

    /// Releases the payload onto the current surface and ends the gesture.
    ///
    /// The surface's visual state is cleared whatever the drop does with
    /// the payload.
    pub fn drop_on(&mut self, target: &mut dyn DropTarget) -> Result<(), DragStateError> {
        if self.phase != DragPhase::OverTarget {
            return Err(DragStateError::NotOverTarget);
        }

        target.on_drop(&self.transfer);
        target.drag_leave();
        self.finish();
        Ok(())
    }

    /// Ends the gesture without a drop; no mutation happens anywhere.
    ///
    /// Hosts deliver a leave event before the gesture ends, so a gesture
    /// cancelled over a surface goes through [`DragGesture::leave_target`]
    /// first; `cancel` itself touches no surface.
    pub fn cancel(&mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.transfer.clear();
        self.phase = DragPhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::{DragGesture, DragPhase, DragStateError};
    use crate::dnd::transfer::{DragTransfer, DropEffect, MEDIA_TYPE_PLAIN_TEXT};
    use crate::dnd::{Draggable, DropTarget};

    struct StubItem;

    impl Draggable for StubItem {
        fn drag_start(&self, transfer: &mut DragTransfer) {
            transfer.set_data(MEDIA_TYPE_PLAIN_TEXT, "stub-id");
        }
    }

    struct StubTarget {
        accepts: bool,
        over: bool,
        dropped_payloads: Vec<String>,
    }

    impl StubTarget {
        fn new(accepts: bool) -> Self {
            Self {
                accepts,
                over: false,
                dropped_payloads: Vec::new(),
            }
        }
    }

    impl DropTarget for StubTarget {
        fn drag_over(&mut self, transfer: &DragTransfer) -> bool {
            if self.accepts && transfer.data(MEDIA_TYPE_PLAIN_TEXT).is_some() {
                self.over = true;
                return true;
            }
            false
        }

        fn drag_leave(&mut self) {
            self.over = false;
        }

        fn on_drop(&mut self, transfer: &DragTransfer) {
            if let Some(payload) = transfer.data(MEDIA_TYPE_PLAIN_TEXT) {
                self.dropped_payloads.push(payload.to_string());
            }
        }
    }

    #[test]
    fn begin_attaches_payload_and_marks_move() {
        let mut gesture = DragGesture::new();

        gesture.begin(&StubItem).expect("begin from idle");

        assert_eq!(gesture.phase(), DragPhase::Dragging);
        assert_eq!(gesture.transfer().data(MEDIA_TYPE_PLAIN_TEXT), Some("stub-id"));
        assert_eq!(gesture.transfer().effect(), Some(DropEffect::Move));
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut gesture = DragGesture::new();
        gesture.begin(&StubItem).expect("begin from idle");

        assert_eq!(
            gesture.begin(&StubItem),
            Err(DragStateError::AlreadyDragging)
        );
    }

    #[test]
    fn full_gesture_delivers_payload_and_clears_target() {
        let mut gesture = DragGesture::new();
        let mut target = StubTarget::new(true);

        gesture.begin(&StubItem).expect("begin");
        assert!(gesture.enter_target(&mut target).expect("enter"));
        assert_eq!(gesture.phase(), DragPhase::OverTarget);
        assert!(target.over);

        gesture.drop_on(&mut target).expect("drop");

        assert_eq!(target.dropped_payloads, vec!["stub-id".to_string()]);
        assert!(!target.over);
        assert_eq!(gesture.phase(), DragPhase::Idle);
        assert_eq!(gesture.transfer().data(MEDIA_TYPE_PLAIN_TEXT), None);
    }

    #[test]
    fn rejecting_target_keeps_gesture_dragging() {
        let mut gesture = DragGesture::new();
        let mut target = StubTarget::new(false);

        gesture.begin(&StubItem).expect("begin");
        assert!(!gesture.enter_target(&mut target).expect("enter"));
        assert_eq!(gesture.phase(), DragPhase::Dragging);

        assert_eq!(
            gesture.drop_on(&mut target),
            Err(DragStateError::NotOverTarget)
        );
        assert!(target.dropped_payloads.is_empty());
    }

    #[test]
    fn leave_target_clears_visual_state_and_resumes_dragging() {
        let mut gesture = DragGesture::new();
        let mut target = StubTarget::new(true);

        gesture.begin(&StubItem).expect("begin");
        gesture.enter_target(&mut target).expect("enter");
        gesture.leave_target(&mut target).expect("leave");

        assert!(!target.over);
        assert_eq!(gesture.phase(), DragPhase::Dragging);
        assert!(target.dropped_payloads.is_empty());
    }

    #[test]
    fn cancel_returns_to_idle_without_delivery() {
        let mut gesture = DragGesture::new();
        let mut target = StubTarget::new(true);

        gesture.begin(&StubItem).expect("begin");
        gesture.enter_target(&mut target).expect("enter");
        gesture.leave_target(&mut target).expect("leave");
        gesture.cancel();

        assert!(!target.over);
        assert_eq!(gesture.phase(), DragPhase::Idle);
        assert!(target.dropped_payloads.is_empty());
        assert_eq!(gesture.transfer().data(MEDIA_TYPE_PLAIN_TEXT), None);
    }

    #[test]
    fn entering_a_second_surface_requires_leaving_the_first() {
        let mut gesture = DragGesture::new();
        let mut first = StubTarget::new(true);
        let mut second = StubTarget::new(true);

        gesture.begin(&StubItem).expect("begin");
        gesture.enter_target(&mut first).expect("enter first");

        assert_eq!(
            gesture.enter_target(&mut second),
            Err(DragStateError::AlreadyOverTarget)
        );
        assert!(first.over);

        gesture.leave_target(&mut first).expect("leave first");
        assert!(!first.over);
        assert!(gesture.enter_target(&mut second).expect("enter second"));

        gesture.drop_on(&mut second).expect("drop");
        assert!(!first.over);
        assert!(!second.over);
        assert_eq!(second.dropped_payloads, vec!["stub-id".to_string()]);
    }

    #[test]
    fn target_transitions_require_an_in_flight_gesture() {
        let mut gesture = DragGesture::new();
        let mut target = StubTarget::new(true);

        assert_eq!(
            gesture.enter_target(&mut target),
            Err(DragStateError::NotDragging)
        );
        assert_eq!(
            gesture.leave_target(&mut target),
            Err(DragStateError::NotOverTarget)
        );
    }
}
