use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A registered move listener that lives as long as the knob is held.
///
/// Dropping the session unregisters the listener before `drop` returns, so
/// no move event can reach the panel after the release handler has run.
pub struct DragSession {
    target: web::EventTarget,
    event: &'static str,
    listener: Closure<dyn FnMut(web::Event)>,
}

impl DragSession {
    pub fn begin(
        target: &web::EventTarget,
        event: &'static str,
        on_move: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let listener = Closure::wrap(Box::new(on_move) as Box<dyn FnMut(web::Event)>);
        if let Err(e) =
            target.add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        {
            log::warn!("[drag] could not listen for {}: {:?}", event, e);
            return None;
        }
        log::debug!("[drag] begin ({})", event);
        Some(Self {
            target: target.clone(),
            event,
            listener,
        })
    }
}

impl Drop for DragSession {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.listener.as_ref().unchecked_ref();
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, callback);
        log::debug!("[drag] end ({})", self.event);
    }
}
