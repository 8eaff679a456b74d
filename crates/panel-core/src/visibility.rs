//! Overlay glyph bookkeeping.
//!
//! The overlay is the SVG clip path whose children light up parts of the
//! panel artwork. [`VisibilitySet`] is the typed set of glyphs that should be
//! lit, [`Overlay`] is the surface that actually shows them, and
//! [`OverlayRenderer`] diffs one against the other so the rendered overlay
//! always equals the set derived from device state.

use crate::constants::{DOT_COUNT, INPUT_COUNT};
use crate::error::PanelError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// One togglable overlay element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Glyph {
    /// Volume dot, 1..=11 from the bottom of the arc.
    Dot(u8),
    /// Input indicator, 1..=6.
    Input(u8),
}

impl Glyph {
    pub fn dot(index: u8) -> Option<Self> {
        (1..=DOT_COUNT).contains(&index).then_some(Glyph::Dot(index))
    }

    pub fn input(index: u8) -> Option<Self> {
        (1..=INPUT_COUNT).contains(&index).then_some(Glyph::Input(index))
    }

    /// Element id of the template glyph, e.g. `volume7` or `input3`.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Dot(i) => write!(f, "volume{}", i),
            Glyph::Input(i) => write!(f, "input{}", i),
        }
    }
}

impl FromStr for Glyph {
    type Err = PanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = if let Some(n) = s.strip_prefix("volume") {
            n.parse().ok().and_then(Glyph::dot)
        } else if let Some(n) = s.strip_prefix("input") {
            n.parse().ok().and_then(Glyph::input)
        } else {
            None
        };
        parsed.ok_or_else(|| PanelError::UnknownGlyph(s.to_string()))
    }
}

const SET_INLINE: usize = (DOT_COUNT + INPUT_COUNT) as usize;

/// Sorted set of glyphs; a glyph appears at most once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibilitySet {
    glyphs: SmallVec<[Glyph; SET_INLINE]>,
}

impl VisibilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the glyph was already present.
    pub fn insert(&mut self, glyph: Glyph) -> bool {
        match self.glyphs.binary_search(&glyph) {
            Ok(_) => false,
            Err(at) => {
                self.glyphs.insert(at, glyph);
                true
            }
        }
    }

    /// Returns `false` if the glyph was not present.
    pub fn remove(&mut self, glyph: Glyph) -> bool {
        match self.glyphs.binary_search(&glyph) {
            Ok(at) => {
                self.glyphs.remove(at);
                true
            }
            Err(_) => false,
        }
    }

    pub fn clear(&mut self) {
        self.glyphs.clear();
    }

    pub fn contains(&self, glyph: Glyph) -> bool {
        self.glyphs.binary_search(&glyph).is_ok()
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Glyph> + '_ {
        self.glyphs.iter().copied()
    }

    /// Glyphs in `self` but not in `other`.
    pub fn difference<'a>(&'a self, other: &'a VisibilitySet) -> impl Iterator<Item = Glyph> + 'a {
        self.iter().filter(move |g| !other.contains(*g))
    }

    /// Highest lit volume dot, if any.
    pub fn highest_dot(&self) -> Option<u8> {
        self.iter()
            .filter_map(|g| match g {
                Glyph::Dot(i) => Some(i),
                Glyph::Input(_) => None,
            })
            .max()
    }
}

impl FromIterator<Glyph> for VisibilitySet {
    fn from_iter<I: IntoIterator<Item = Glyph>>(iter: I) -> Self {
        let mut set = VisibilitySet::new();
        for g in iter {
            set.insert(g);
        }
        set
    }
}

/// Surface that renders glyphs, e.g. the SVG clip path.
pub trait Overlay {
    /// Make `glyph` visible; showing an already visible glyph replaces it.
    fn show(&mut self, glyph: Glyph) -> Result<(), PanelError>;
    /// Remove `glyph` if visible.
    fn hide(&mut self, glyph: Glyph);
    /// Remove every glyph.
    fn clear(&mut self);
}

/// Keeps an [`Overlay`] in step with a desired [`VisibilitySet`].
pub struct OverlayRenderer<O: Overlay> {
    overlay: O,
    rendered: VisibilitySet,
}

impl<O: Overlay> OverlayRenderer<O> {
    pub fn new(overlay: O) -> Self {
        Self {
            overlay,
            rendered: VisibilitySet::new(),
        }
    }

    pub fn rendered(&self) -> &VisibilitySet {
        &self.rendered
    }

    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Issue the hide/show calls that turn the rendered set into `desired`.
    ///
    /// A glyph whose template is missing is logged and left out of the
    /// rendered set, so the next render tries it again.
    pub fn render(&mut self, desired: &VisibilitySet) {
        if desired.is_empty() {
            if !self.rendered.is_empty() {
                self.overlay.clear();
                self.rendered.clear();
                log::debug!("[overlay] cleared");
            }
            return;
        }

        let stale: SmallVec<[Glyph; SET_INLINE]> = self.rendered.difference(desired).collect();
        for g in stale {
            self.overlay.hide(g);
            self.rendered.remove(g);
        }

        let fresh: SmallVec<[Glyph; SET_INLINE]> = desired.difference(&self.rendered).collect();
        for g in fresh {
            match self.overlay.show(g) {
                Ok(()) => {
                    self.rendered.insert(g);
                }
                Err(e) => log::error!("[overlay] {}", e),
            }
        }
    }

    /// Forget what was rendered and clear the overlay.
    pub fn reset(&mut self) {
        self.overlay.clear();
        self.rendered.clear();
    }
}
