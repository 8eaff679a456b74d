pub mod buttons;
pub mod pointer;

pub use buttons::wire_buttons;
pub use pointer::{wire_knob_handlers, KnobWiring};

use crate::dom;
use crate::overlay::ClipPathOverlay;
use panel_core::{Panel, PanelEvent};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SharedPanel = Rc<RefCell<Panel<ClipPathOverlay>>>;

/// Feed one event to the panel and, if it changed anything, turn the knob to match.
pub fn dispatch_and_sync(panel: &SharedPanel, knob: &web::Element, event: PanelEvent) {
    let mut p = panel.borrow_mut();
    if p.dispatch(event) {
        dom::set_knob_rotation(knob, p.knob_angle_deg());
    }
}
