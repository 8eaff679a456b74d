// Host-side tests for the DOM contract and formatting helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use panel_core::{Glyph, DOT_COUNT, INPUT_COUNT, KNOB_REST_DEG, KNOB_TRAVEL_DEG};

#[test]
fn volume_markers_double_as_dot_templates() {
    for i in 1..=DOT_COUNT {
        assert_eq!(volume_marker_id(i), Glyph::Dot(i).key());
    }
}

#[test]
fn clone_selector_targets_data_attribute() {
    assert_eq!(clone_selector("input3"), "[data-id='input3']");
    for i in 1..=INPUT_COUNT {
        let key = Glyph::Input(i).key();
        assert!(clone_selector(&key).starts_with(&format!("[{}=", CLONE_KEY_ATTR)));
    }
}

#[test]
fn knob_transform_formats_rotation() {
    assert_eq!(knob_transform(KNOB_REST_DEG), "rotate(4.2deg)");
    assert_eq!(knob_transform(KNOB_TRAVEL_DEG), "rotate(270deg)");
    assert_eq!(knob_transform(135.5), "rotate(135.5deg)");
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        KNOB_ID,
        DIAL_ID,
        POWER_BUTTON_ID,
        INPUT_BUTTON_ID,
        CLIP_PATH_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
        assert!(a.parse::<Glyph>().is_err(), "{} collides with a glyph key", a);
    }
}
