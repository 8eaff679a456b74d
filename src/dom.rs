use crate::constants::knob_transform;
use glam::DVec2;
use panel_core::Rect;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn required_element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] no #{} to attach click handler", element_id);
    }
}

/// Current document scroll position.
pub fn scroll_offset() -> DVec2 {
    web::window()
        .map(|w| {
            DVec2::new(
                w.scroll_x().unwrap_or(0.0),
                w.scroll_y().unwrap_or(0.0),
            )
        })
        .unwrap_or(DVec2::ZERO)
}

/// Bounding box of `el` in page coordinates (viewport box plus scroll).
pub fn page_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height()).translated(scroll_offset())
}

/// Inline style of an HTML or SVG element.
pub fn element_style(el: &web::Element) -> Option<web::CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<web::SvgElement>().map(|svg| svg.style())
}

pub fn set_knob_rotation(knob: &web::Element, angle_deg: f64) {
    match element_style(knob) {
        Some(style) => {
            _ = style.set_property("transform", &knob_transform(angle_deg));
        }
        None => log::warn!("[knob] element has no inline style"),
    }
}
