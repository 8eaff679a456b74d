use crate::constants::{DOT_COUNT, MOBILE_UA_TOKENS};
use crate::geometry::Rect;
use glam::DVec2;

/// Which family of DOM events drives the knob.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Pointer,
    Touch,
}

impl InputKind {
    /// Resolve the platform from a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if MOBILE_UA_TOKENS.iter().any(|t| ua.contains(t)) {
            InputKind::Touch
        } else {
            InputKind::Pointer
        }
    }

    #[inline]
    pub fn press_event(self) -> &'static str {
        match self {
            InputKind::Pointer => "mousedown",
            InputKind::Touch => "touchstart",
        }
    }

    #[inline]
    pub fn release_event(self) -> &'static str {
        match self {
            InputKind::Pointer => "mouseup",
            InputKind::Touch => "touchend",
        }
    }

    #[inline]
    pub fn move_event(self) -> &'static str {
        match self {
            InputKind::Pointer => "mousemove",
            InputKind::Touch => "touchmove",
        }
    }
}

/// A UI trigger, normalized away from the DOM event that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanelEvent {
    /// Click on discrete volume marker 1..=11.
    VolumeMarker(u8),
    /// Pointer moved while the knob is held; both in page coordinates.
    KnobDrag { pointer: DVec2, knob: Rect },
    PowerButton,
    InputButton,
}

/// Raw volume selected by clicking marker `index`.
#[inline]
pub fn marker_volume(index: u8) -> f64 {
    index as f64 / DOT_COUNT as f64 * 100.0
}
