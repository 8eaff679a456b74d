use crate::geometry::Rect;

/// CSS box for the overlay container, in px relative to the panel SVG.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayBox {
    pub width: f64,
    pub height: f64,
    pub top: f64,
}

impl OverlayBox {
    /// `(property, value)` pairs ready to be written into an inline style.
    pub fn css(&self) -> [(&'static str, String); 3] {
        [
            ("width", format!("{}px", self.width)),
            ("height", format!("{}px", self.height)),
            ("top", format!("{}px", self.top)),
        ]
    }
}

/// Box that lays the overlay exactly over the dial.
///
/// `dial` and `container_top` must be in the same coordinate space.
#[inline]
pub fn overlay_box(dial: &Rect, container_top: f64) -> OverlayBox {
    OverlayBox {
        width: dial.width,
        height: dial.height,
        top: dial.top - container_top,
    }
}
