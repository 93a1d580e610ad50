use crate::constants::{CONFIG_ATTRIBUTE, REDUCED_MOTION_QUERY};
use crate::error::EnvError;
use wasm_bindgen::JsCast;
use web_sys as web;

// Fixed full-viewport layer behind page content that never takes pointer input.
const CANVAS_STYLE: &str =
    "position:fixed;inset:0;width:100vw;height:100vh;pointer-events:none;z-index:0";

#[inline]
pub fn window_document() -> Result<(web::Window, web::Document), EnvError> {
    let window = web::window().ok_or(EnvError::NoWindow)?;
    let document = window.document().ok_or(EnvError::NoDocument)?;
    Ok((window, document))
}

pub fn canvas_by_id(
    document: &web::Document,
    id: &str,
) -> Result<web::HtmlCanvasElement, EnvError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| EnvError::MissingCanvas { id: id.to_owned() })?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| EnvError::NotACanvas { id: id.to_owned() })
}

/// Pin the canvas behind the page and let pointer events pass through it.
pub fn style_as_background(canvas: &web::HtmlCanvasElement) {
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    _ = canvas.set_attribute("aria-hidden", "true");
}

/// Size the backing store to the viewport times the device pixel ratio.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let css_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        let css_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        canvas.set_width((css_w * dpr) as u32);
        canvas.set_height((css_h * dpr) as u32);
    }
}

#[inline]
pub fn config_attribute(canvas: &web::HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute(CONFIG_ATTRIBUTE)
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    matches!(
        window.match_media(REDUCED_MOTION_QUERY),
        Ok(Some(mql)) if mql.matches()
    )
}
