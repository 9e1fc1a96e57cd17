//! Payload carrier for one drag gesture.

/// Media type used for project-id payloads.
pub const MEDIA_TYPE_PLAIN_TEXT: &str = "text/plain";

/// Operation a drag source allows for its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// Payload moves; the source gives it up on drop.
    Move,
    /// Payload is duplicated at the target.
    Copy,
}

/// Typed stand-in for the host's data-transfer object.
///
/// Carries at most one payload, keyed by media type, from a drag source to
/// a drop surface. The gesture state machine owns one instance per gesture
/// and clears it when the gesture ends.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DragTransfer {
    payload: Option<(String, String)>,
    effect: Option<DropEffect>,
}

impl DragTransfer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the payload under one media type, replacing any previous one.
    pub fn set_data(&mut self, media_type: &str, value: &str) {
        self.payload = Some((media_type.to_string(), value.to_string()));
    }

    /// Returns the payload when the media type matches.
    pub fn data(&self, media_type: &str) -> Option<&str> {
        match &self.payload {
            Some((carried, value)) if carried == media_type => Some(value.as_str()),
            _ => None,
        }
    }

    /// Marks the operation the source allows.
    pub fn set_effect(&mut self, effect: DropEffect) {
        self.effect = Some(effect);
    }

    pub fn effect(&self) -> Option<DropEffect> {
        self.effect
    }

    /// Drops payload and effect, returning the carrier to its empty state.
    pub fn clear(&mut self) {
        self.payload = None;
        self.effect = None;
    }
}
