use super::EventListener;
use crate::pointer::PointerTracker;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer across the whole window.
///
/// The canvas is `pointer-events: none`, so the listener sits on the window.
/// Client coordinates already match the full-viewport canvas; they are
/// stored unclamped.
pub fn wire_pointermove(
    window: &web::Window,
    tracker: PointerTracker,
) -> anyhow::Result<EventListener> {
    EventListener::attach(window, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            tracker.record(ev.client_x() as f32, ev.client_y() as f32);
        }
    })
}
