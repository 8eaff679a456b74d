use super::{dispatch_and_sync, SharedPanel};
use crate::dom;
use crate::drag::DragSession;
use glam::DVec2;
use panel_core::{InputKind, PanelEvent};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct KnobWiring {
    pub document: web::Document,
    pub knob: web::Element,
    pub panel: SharedPanel,
    pub input_kind: InputKind,
    pub drag: Rc<RefCell<Option<DragSession>>>,
}

pub fn wire_knob_handlers(w: KnobWiring) {
    wire_press(&w);
    wire_release(&w);
}

/// Page position of the pointer, or of the first finger for touch input.
pub fn pointer_page_position(ev: &web::Event, kind: InputKind) -> Option<DVec2> {
    match kind {
        InputKind::Pointer => ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| DVec2::new(m.page_x() as f64, m.page_y() as f64)),
        InputKind::Touch => ev
            .dyn_ref::<web::TouchEvent>()
            .and_then(|t| t.touches().get(0))
            .map(|t| DVec2::new(t.page_x() as f64, t.page_y() as f64)),
    }
}

fn knob_move_handler(
    panel: SharedPanel,
    knob: web::Element,
    kind: InputKind,
) -> impl FnMut(web::Event) + 'static {
    move |ev: web::Event| {
        let Some(pointer) = pointer_page_position(&ev, kind) else {
            return;
        };
        // Re-read every sample: resizes and scrolls can happen mid-drag.
        let knob_rect = dom::page_rect(&knob);
        dispatch_and_sync(
            &panel,
            &knob,
            PanelEvent::KnobDrag {
                pointer,
                knob: knob_rect,
            },
        );
    }
}

fn wire_press(w: &KnobWiring) {
    let w = w.clone();
    let knob_for_listener = w.knob.clone();
    let press_event = w.input_kind.press_event();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let session = DragSession::begin(
            &w.document,
            w.input_kind.move_event(),
            knob_move_handler(w.panel.clone(), w.knob.clone(), w.input_kind),
        );
        // Replacing a live session drops it, which unregisters its listener.
        *w.drag.borrow_mut() = session;
    }) as Box<dyn FnMut(_)>);
    _ = knob_for_listener
        .add_event_listener_with_callback(press_event, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_release(w: &KnobWiring) {
    let drag = w.drag.clone();
    let release_event = w.input_kind.release_event();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        // Dropping the session unregisters the move listener before we return.
        let ended = drag.borrow_mut().take();
        drop(ended);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .document
        .add_event_listener_with_callback(release_event, closure.as_ref().unchecked_ref());
    closure.forget();
}
