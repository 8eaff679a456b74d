//! Power, input and volume state of the amplifier console.
//!
//! Everything here is a no-op while the device is off. The glyphs the overlay
//! should show are derived from [`DeviceState`] rather than tracked
//! separately, so the two cannot drift apart.

use crate::constants::{
    DOT_COUNT, INPUT_COUNT, INPUT_LABELS, KNOB_REST_DEG, KNOB_TRAVEL_DEG, VOLUME_MAX,
    VOLUME_THRESHOLDS,
};
use crate::geometry::{knob_angle_for_threshold, KnobReading};
use crate::visibility::{Glyph, VisibilitySet};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceState {
    pub power: bool,
    /// 0 while off, 1..=6 while on.
    pub current_input: u8,
    /// 0..=100
    pub current_volume: u8,
}

impl DeviceState {
    /// Highest threshold strictly exceeded by the current volume, 0 if none.
    pub fn current_dot(&self) -> u8 {
        VOLUME_THRESHOLDS
            .iter()
            .copied()
            .filter(|t| self.current_volume > *t)
            .last()
            .unwrap_or(0)
    }

    /// Number of lit dots; dots light from the bottom of the arc upwards.
    pub fn lit_dots(&self) -> u8 {
        VOLUME_THRESHOLDS
            .iter()
            .filter(|t| self.current_volume > **t)
            .count() as u8
    }

    /// Overlay glyphs that mirror this state.
    pub fn glyphs(&self) -> VisibilitySet {
        if !self.power {
            return VisibilitySet::new();
        }
        let mut set: VisibilitySet = (1..=self.lit_dots().min(DOT_COUNT))
            .filter_map(Glyph::dot)
            .collect();
        if let Some(g) = Glyph::input(self.current_input) {
            set.insert(g);
        }
        set
    }
}

/// Label of input `index` (1-based) for logs.
pub fn input_label(index: u8) -> &'static str {
    match index {
        1..=INPUT_COUNT => INPUT_LABELS[index as usize - 1],
        _ => "none",
    }
}

/// Device state machine plus the knob's visual rotation.
#[derive(Clone, Debug)]
pub struct Device {
    state: DeviceState,
    knob_angle_deg: f64,
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}

impl Device {
    pub fn new() -> Self {
        Self {
            state: DeviceState::default(),
            knob_angle_deg: KNOB_REST_DEG,
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn is_on(&self) -> bool {
        self.state.power
    }

    pub fn knob_angle_deg(&self) -> f64 {
        self.knob_angle_deg
    }

    pub fn toggle_power(&mut self) {
        if self.state.power {
            self.turn_off();
        } else {
            self.turn_on();
        }
    }

    fn turn_on(&mut self) {
        // Always starts on the first input; the previous selection is not resumed.
        self.state.power = true;
        self.state.current_input = 1;
        log::info!("[power] on, input 1 ({})", input_label(1));
    }

    fn turn_off(&mut self) {
        self.state = DeviceState::default();
        self.knob_angle_deg = KNOB_REST_DEG;
        log::info!("[power] off");
    }

    /// Advance to the next input, wrapping 6 → 1. Returns `false` while off.
    pub fn cycle_input(&mut self) -> bool {
        if !self.state.power {
            return false;
        }
        self.state.current_input = self.state.current_input % INPUT_COUNT + 1;
        log::info!(
            "[input] {} ({})",
            self.state.current_input,
            input_label(self.state.current_input)
        );
        true
    }

    /// Store a raw volume percentage. Returns `false` while off.
    ///
    /// When `also_set_knob_angle` is set (discrete marker clicks) the knob is
    /// turned to the highest lit dot; drags rotate the knob themselves.
    pub fn set_volume(&mut self, raw_percent: f64, also_set_knob_angle: bool) -> bool {
        if !self.state.power {
            return false;
        }
        let volume = if raw_percent.is_nan() {
            0
        } else {
            raw_percent.floor().clamp(0.0, VOLUME_MAX as f64) as u8
        };
        self.state.current_volume = volume;

        if also_set_knob_angle {
            self.knob_angle_deg = if volume >= VOLUME_MAX {
                KNOB_TRAVEL_DEG
            } else {
                knob_angle_for_threshold(self.state.current_dot())
            };
        }
        log::debug!(
            "[volume] {} ({} dots, knob {:.1}°)",
            volume,
            self.state.lit_dots(),
            self.knob_angle_deg
        );
        true
    }

    /// Apply a knob drag sample. Returns `false` while off.
    pub fn apply_knob_reading(&mut self, reading: KnobReading) -> bool {
        if !self.state.power {
            return false;
        }
        self.knob_angle_deg = reading.angle_deg;
        self.set_volume(reading.volume as f64, false)
    }
}
