use crate::constants::{clone_selector, CLONE_KEY_ATTR};
use panel_core::{Glyph, Overlay, PanelError};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The SVG clip path whose children light up parts of the panel.
///
/// Each lit glyph is a clone of the element whose id is the glyph key. The
/// clone's `id` moves to `data-id` so it never collides with its template.
pub struct ClipPathOverlay {
    document: web::Document,
    container: web::Element,
}

impl ClipPathOverlay {
    pub fn new(document: web::Document, container: web::Element) -> Self {
        Self {
            document,
            container,
        }
    }
}

impl Overlay for ClipPathOverlay {
    fn show(&mut self, glyph: Glyph) -> Result<(), PanelError> {
        let key = glyph.key();
        let template = self
            .document
            .get_element_by_id(&key)
            .ok_or_else(|| PanelError::MissingTemplate(key.clone()))?;

        self.hide(glyph);

        let clone = template
            .clone_node_with_deep(true)
            .ok()
            .and_then(|n| n.dyn_into::<web::Element>().ok())
            .ok_or_else(|| PanelError::MissingTemplate(key.clone()))?;
        _ = clone.set_attribute(CLONE_KEY_ATTR, &key);
        _ = clone.remove_attribute("id");
        _ = self.container.append_child(&clone);
        Ok(())
    }

    fn hide(&mut self, glyph: Glyph) {
        let selector = clone_selector(&glyph.key());
        while let Ok(Some(el)) = self.container.query_selector(&selector) {
            el.remove();
        }
    }

    fn clear(&mut self) {
        while let Some(child) = self.container.first_child() {
            _ = self.container.remove_child(&child);
        }
    }
}
