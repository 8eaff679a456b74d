use super::{dispatch_and_sync, SharedPanel};
use crate::constants::{volume_marker_id, INPUT_BUTTON_ID, POWER_BUTTON_ID};
use crate::dom;
use panel_core::{PanelEvent, DOT_COUNT};
use web_sys as web;

/// Wire the eleven volume markers plus the power and input buttons.
pub fn wire_buttons(document: &web::Document, panel: &SharedPanel, knob: &web::Element) {
    for i in 1..=DOT_COUNT {
        let panel = panel.clone();
        let knob = knob.clone();
        dom::add_click_listener(document, &volume_marker_id(i), move || {
            dispatch_and_sync(&panel, &knob, PanelEvent::VolumeMarker(i));
        });
    }

    let panel_power = panel.clone();
    let knob_power = knob.clone();
    dom::add_click_listener(document, POWER_BUTTON_ID, move || {
        dispatch_and_sync(&panel_power, &knob_power, PanelEvent::PowerButton);
    });

    let panel_input = panel.clone();
    let knob_input = knob.clone();
    dom::add_click_listener(document, INPUT_BUTTON_ID, move || {
        dispatch_and_sync(&panel_input, &knob_input, PanelEvent::InputButton);
    });
}
