use crate::device::{Device, DeviceState};
use crate::geometry::angle_and_volume_from_pointer;
use crate::input::{marker_volume, InputKind, PanelEvent};
use crate::visibility::{Overlay, OverlayRenderer, VisibilitySet};

/// Startup parameters for a panel.
#[derive(Clone, Debug)]
pub struct PanelConfig {
    /// Resolved once at startup and fixed for the session.
    pub input_kind: InputKind,
    pub log_level: log::Level,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            input_kind: InputKind::Pointer,
            log_level: log::Level::Info,
        }
    }
}

/// Device state machine wired to an overlay.
///
/// Every operation re-renders the overlay from the device state, so the
/// visible glyphs always match what the device reports.
pub struct Panel<O: Overlay> {
    device: Device,
    renderer: OverlayRenderer<O>,
    config: PanelConfig,
}

impl<O: Overlay> Panel<O> {
    pub fn new(overlay: O, config: PanelConfig) -> Self {
        let mut renderer = OverlayRenderer::new(overlay);
        // Start from a known empty overlay whatever the markup shipped with.
        renderer.reset();
        Self {
            device: Device::new(),
            renderer,
            config,
        }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    pub fn state(&self) -> &DeviceState {
        self.device.state()
    }

    pub fn knob_angle_deg(&self) -> f64 {
        self.device.knob_angle_deg()
    }

    pub fn visible(&self) -> &VisibilitySet {
        self.renderer.rendered()
    }

    pub fn overlay(&self) -> &O {
        self.renderer.overlay()
    }

    /// Handle one normalized UI event. Returns whether device state changed.
    pub fn dispatch(&mut self, event: PanelEvent) -> bool {
        let changed = match event {
            PanelEvent::VolumeMarker(index) => self.device.set_volume(marker_volume(index), true),
            PanelEvent::KnobDrag { pointer, knob } => {
                if !self.device.is_on() {
                    return false;
                }
                match angle_and_volume_from_pointer(pointer, &knob) {
                    Some(reading) => self.device.apply_knob_reading(reading),
                    None => false,
                }
            }
            PanelEvent::PowerButton => {
                self.device.toggle_power();
                true
            }
            PanelEvent::InputButton => self.device.cycle_input(),
        };
        if changed {
            self.render();
        }
        changed
    }

    pub fn toggle_power(&mut self) {
        self.dispatch(PanelEvent::PowerButton);
    }

    pub fn cycle_input(&mut self) -> bool {
        self.dispatch(PanelEvent::InputButton)
    }

    pub fn set_volume(&mut self, raw_percent: f64, also_set_knob_angle: bool) -> bool {
        let changed = self.device.set_volume(raw_percent, also_set_knob_angle);
        if changed {
            self.render();
        }
        changed
    }

    fn render(&mut self) {
        let desired = self.device.state().glyphs();
        self.renderer.render(&desired);
    }
}
