// Knob and volume tuning constants shared by the core and the web frontend.

// Knob travel
pub const KNOB_TRAVEL_DEG: f64 = 270.0; // full mechanical travel, maps to 100% volume
pub const KNOB_REST_DEG: f64 = 4.2; // visual zero; 0° looks identical to max in the artwork
pub const KNOB_ANGLE_OFFSET_DEG: f64 = 135.0; // rest orientation relative to the atan2 zero
pub const DEGREES_PER_PERCENT: f64 = KNOB_TRAVEL_DEG / 100.0;

pub const VOLUME_MAX: u8 = 100;

// Volume dots on the arc
pub const DOT_COUNT: u8 = 11;

/// Minimum raw volume that must be exceeded to light dot `i + 1`.
pub const VOLUME_THRESHOLDS: [u8; DOT_COUNT as usize] = [1, 11, 22, 31, 40, 51, 61, 70, 79, 88, 97];

// Input sources
pub const INPUT_COUNT: u8 = 6;

/// Console names of the six inputs, in selection order.
pub const INPUT_LABELS: [&str; INPUT_COUNT as usize] = [
    "TRS 5.1",
    "RCA 2.0",
    "Optical 1",
    "Optical 2",
    "Coaxial",
    "Aux (3.5mm)",
];

// Lower-case user-agent fragments that identify touch-first platforms
pub const MOBILE_UA_TOKENS: [&str; 7] = [
    "iphone",
    "ipod",
    "ipad",
    "android",
    "blackberry",
    "windows phone",
    "symbian",
];
