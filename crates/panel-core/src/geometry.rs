//! Knob geometry: pointer position to rotation angle and volume.
//!
//! All coordinates are page coordinates (CSS pixels, y grows downwards). The
//! knob box is passed in on every call; callers must re-read it per event
//! because resizes and scrolls move the knob between samples.

use crate::constants::{
    DEGREES_PER_PERCENT, KNOB_ANGLE_OFFSET_DEG, KNOB_REST_DEG, KNOB_TRAVEL_DEG, VOLUME_MAX,
};
use glam::DVec2;

/// Axis-aligned box in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Same box shifted by `offset`, e.g. a viewport rect moved by the scroll position.
    #[inline]
    pub fn translated(&self, offset: DVec2) -> Self {
        Self::new(self.left + offset.x, self.top + offset.y, self.width, self.height)
    }
}

/// Knob center derived from its current bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobGeometry {
    pub center: DVec2,
}

impl KnobGeometry {
    pub fn from_rect(rect: &Rect) -> Self {
        Self {
            center: rect.center(),
        }
    }

    /// Knob rotation implied by `pointer`, before domain checks and clamping.
    ///
    /// 0° is the knob's rest orientation and positive angles turn clockwise.
    pub fn raw_angle_deg(&self, pointer: DVec2) -> f64 {
        let adjacent = self.center.x - pointer.x;
        let opposite = self.center.y - pointer.y;
        let degrees = adjacent.atan2(opposite).to_degrees();
        -(degrees - KNOB_ANGLE_OFFSET_DEG)
    }
}

/// Knob rotation and the volume it selects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobReading {
    pub angle_deg: f64,
    pub volume: u8,
}

#[inline]
pub fn in_travel(angle_deg: f64) -> bool {
    (0.0..=KNOB_TRAVEL_DEG).contains(&angle_deg)
}

/// Volume selected by a knob angle, truncated toward zero.
#[inline]
pub fn volume_for_angle(angle_deg: f64) -> u8 {
    // angle * 100 / travel keeps 270° at exactly 100
    let percent = (angle_deg * 100.0 / KNOB_TRAVEL_DEG).floor();
    percent.clamp(0.0, VOLUME_MAX as f64) as u8
}

/// Map a pointer sample onto the knob.
///
/// Returns `None` when the pointer lies outside the knob's 270° of travel,
/// which is what gives the knob its hard stops.
pub fn angle_and_volume_from_pointer(pointer: DVec2, knob: &Rect) -> Option<KnobReading> {
    let angle = KnobGeometry::from_rect(knob).raw_angle_deg(pointer);
    if !angle.is_finite() || !in_travel(angle) {
        return None;
    }
    let angle_deg = angle.max(KNOB_REST_DEG);
    Some(KnobReading {
        angle_deg,
        volume: volume_for_angle(angle_deg),
    })
}

/// Knob rotation showing a lit-dot threshold after a discrete jump.
#[inline]
pub fn knob_angle_for_threshold(current_dot: u8) -> f64 {
    (current_dot as f64 * DEGREES_PER_PERCENT).clamp(KNOB_REST_DEG, KNOB_TRAVEL_DEG)
}
