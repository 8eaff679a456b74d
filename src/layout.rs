use crate::constants::{DIAL_ID, OVERLAY_BOX_SELECTOR, PANEL_SVG_SELECTOR};
use crate::dom;
use panel_core::overlay_box;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Lay the overlay container exactly over the dial artwork.
pub fn sync_overlay_layout(document: &web::Document) {
    let Some(dial) = document.get_element_by_id(DIAL_ID) else {
        log::warn!("[layout] missing #{}", DIAL_ID);
        return;
    };
    let Ok(Some(container)) = document.query_selector(PANEL_SVG_SELECTOR) else {
        log::warn!("[layout] no element matches '{}'", PANEL_SVG_SELECTOR);
        return;
    };
    let Ok(Some(target)) = document.query_selector(OVERLAY_BOX_SELECTOR) else {
        log::warn!("[layout] no element matches '{}'", OVERLAY_BOX_SELECTOR);
        return;
    };

    let bx = overlay_box(&dom::page_rect(&dial), dom::page_rect(&container).top);
    if let Some(style) = dom::element_style(&target) {
        for (property, value) in bx.css() {
            _ = style.set_property(property, &value);
        }
    }
    log::debug!(
        "[layout] overlay {:.0}x{:.0} at top {:.0}",
        bx.width,
        bx.height,
        bx.top
    );
}

pub fn wire_resize(document: &web::Document) {
    sync_overlay_layout(document);
    let doc = document.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        sync_overlay_layout(&doc);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
