// Shared in-memory overlay for host-side tests.
#![allow(dead_code)]

use panel_core::{Glyph, Overlay, PanelError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Show(Glyph),
    Hide(Glyph),
    Clear,
}

/// Behaves like the clip path: `show` replaces an existing node with the same key.
#[derive(Default)]
pub struct FakeOverlay {
    pub nodes: Vec<Glyph>,
    pub missing: Vec<Glyph>,
    pub calls: Vec<Call>,
}

impl FakeOverlay {
    pub fn without_templates(missing: &[Glyph]) -> Self {
        Self {
            missing: missing.to_vec(),
            ..Self::default()
        }
    }

    pub fn count(&self, glyph: Glyph) -> usize {
        self.nodes.iter().filter(|g| **g == glyph).count()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.nodes.iter().map(|g| g.key()).collect();
        keys.sort();
        keys
    }
}

impl Overlay for FakeOverlay {
    fn show(&mut self, glyph: Glyph) -> Result<(), PanelError> {
        self.calls.push(Call::Show(glyph));
        if self.missing.contains(&glyph) {
            return Err(PanelError::MissingTemplate(glyph.key()));
        }
        self.nodes.retain(|g| *g != glyph);
        self.nodes.push(glyph);
        Ok(())
    }

    fn hide(&mut self, glyph: Glyph) {
        self.calls.push(Call::Hide(glyph));
        self.nodes.retain(|g| *g != glyph);
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
        self.nodes.clear();
    }
}
