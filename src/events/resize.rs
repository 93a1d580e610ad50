use super::EventListener;
use crate::dom;
use web_sys as web;

/// Keep the canvas backing store in step with the viewport.
///
/// Only the surface dimensions change; the particle field keeps the base
/// positions it was generated with.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> anyhow::Result<EventListener> {
    let canvas = canvas.clone();
    EventListener::attach(window, "resize", move |_ev: web::Event| {
        dom::sync_canvas_to_viewport(&canvas);
    })
}
