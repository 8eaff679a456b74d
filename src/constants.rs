/// DOM identities the panel markup must provide.
///
/// The markup itself is not part of this crate; these names are the contract
/// between the page and the wasm module.
pub const KNOB_ID: &str = "knob";
pub const DIAL_ID: &str = "volumeDial";
pub const POWER_BUTTON_ID: &str = "powerButton";
pub const INPUT_BUTTON_ID: &str = "inputButton";
pub const CLIP_PATH_ID: &str = "clipPath"; // overlay container, children are lit glyphs

// Selectors used by the layout sync
pub const OVERLAY_BOX_SELECTOR: &str = ".volume-control";
pub const PANEL_SVG_SELECTOR: &str = ".Z906 svg";

// Cloned glyphs carry their key here instead of `id`, so clones never collide
pub const CLONE_KEY_ATTR: &str = "data-id";

/// Id of discrete volume marker `index`; the marker doubles as the dot's template glyph.
#[inline]
pub fn volume_marker_id(index: u8) -> String {
    format!("volume{}", index)
}

/// Selector matching the overlay clone tagged with `key`.
#[inline]
pub fn clone_selector(key: &str) -> String {
    format!("[{}='{}']", CLONE_KEY_ATTR, key)
}

/// CSS transform value for a knob rotation.
#[inline]
pub fn knob_transform(angle_deg: f64) -> String {
    format!("rotate({}deg)", angle_deg)
}
