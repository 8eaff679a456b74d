#![cfg(target_arch = "wasm32")]
use panel_core::{InputKind, Panel, PanelConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod drag;
mod events;
mod layout;
mod overlay;

use constants::{CLIP_PATH_ID, KNOB_ID};
use overlay::ClipPathOverlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let config = PanelConfig::default();
    console_error_panic_hook::set_once();
    console_log::init_with_level(config.log_level).ok();
    log::info!("z906-panel starting");

    spawn_local(async move {
        if let Err(e) = init(config).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(mut config: PanelConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Platform is fixed for the session.
    let user_agent = window
        .navigator()
        .user_agent()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    config.input_kind = InputKind::from_user_agent(&user_agent);
    log::info!("[input] using {:?} events", config.input_kind);

    let knob = dom::required_element(&document, KNOB_ID)?;
    let clip_path = dom::required_element(&document, CLIP_PATH_ID)?;

    let input_kind = config.input_kind;
    let panel = Rc::new(RefCell::new(Panel::new(
        ClipPathOverlay::new(document.clone(), clip_path),
        config,
    )));
    dom::set_knob_rotation(&knob, panel.borrow().knob_angle_deg());

    events::wire_buttons(&document, &panel, &knob);
    events::wire_knob_handlers(events::KnobWiring {
        document: document.clone(),
        knob: knob.clone(),
        panel: panel.clone(),
        input_kind,
        drag: Rc::new(RefCell::new(None)),
    });
    layout::wire_resize(&document);

    Ok(())
}
