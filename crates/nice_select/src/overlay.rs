//! Overlay visibility state machine
//!
//! The dropdown overlay is either closed or open. Transitions that do not
//! apply to the current state (open-when-open, close-when-closed) yield no
//! new state and are treated as no-ops by the controller. The disabled gate
//! on opening lives in the controller, not here.

/// Overlay events
pub mod overlay_events {
    /// Request to show the overlay
    pub const OPEN: u32 = 30001;
    /// Request to hide the overlay
    pub const CLOSE: u32 = 30002;
    /// Trigger clicked (toggles)
    pub const TRIGGER_CLICK: u32 = 30003;
    /// Click landed outside the component
    pub const OUTSIDE_CLICK: u32 = 30004;
}

/// State machine for overlay visibility
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OverlayState {
    /// Overlay is hidden
    #[default]
    Closed,
    /// Overlay is shown
    Open,
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::Open)
    }

    /// Handle an event and return the new state, or None if no transition
    pub fn on_event(&self, event: u32) -> Option<Self> {
        use overlay_events::*;
        use OverlayState::*;

        match (self, event) {
            (Closed, OPEN) | (Closed, TRIGGER_CLICK) => Some(Open),
            (Open, CLOSE) | (Open, TRIGGER_CLICK) | (Open, OUTSIDE_CLICK) => Some(Closed),
            _ => None,
        }
    }
}
