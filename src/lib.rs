#![cfg(target_arch = "wasm32")]
use crate::config::ConstellationConfig;
use crate::pointer::PointerTracker;
use crate::scene::Scene;
use anyhow::Context;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod color;
mod config;
mod constants;
mod dom;
mod error;
mod events;
mod field;
mod frame;
mod lifecycle;
mod motion;
mod pointer;
mod scene;
mod shading;
mod surface;

thread_local! {
    // Instance auto-mounted at start; lives as long as the page.
    static AUTO_MOUNTED: RefCell<Option<Constellation>> = const { RefCell::new(None) };
}

/// Everything a live background owns. Dropping it stops the frame loop and
/// detaches both listeners, in that order.
struct Mounted {
    render_loop: frame::LoopHandle,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    _pointer: events::EventListener,
    _resize: events::EventListener,
}

/// Handle returned to JS. A disabled handle (nothing mounted) is a valid,
/// silent outcome: the background is decorative.
#[wasm_bindgen]
pub struct Constellation {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl Constellation {
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.mounted
            .as_ref()
            .is_some_and(|m| m.render_loop.is_running())
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.mounted
            .as_ref()
            .and_then(|m| m.frame_ctx.borrow().scene.field().map(|f| f.len()))
            .unwrap_or(0)
    }

    /// Stop drawing and release every subscription. Safe to call twice.
    pub fn unmount(&mut self) {
        if let Some(m) = self.mounted.take() {
            let frames = m.render_loop.frames();
            drop(m);
            log::info!("[constellation] unmounted after {} frames", frames);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let has_default_canvas = dom::window_document()
        .map(|(_, d)| d.get_element_by_id(constants::DEFAULT_CANVAS_ID).is_some())
        .unwrap_or(false);
    if has_default_canvas {
        let instance = mount(constants::DEFAULT_CANVAS_ID, JsValue::UNDEFINED);
        AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(instance));
    }
    Ok(())
}

/// Mount the background on `<canvas id={canvas_id}>`.
///
/// `options` is an optional plain object with `ConstellationConfig` fields;
/// it takes precedence over the canvas `data-constellation` attribute.
#[wasm_bindgen]
pub fn mount(canvas_id: &str, options: JsValue) -> Constellation {
    match try_mount(canvas_id, &options) {
        Ok(mounted) => Constellation {
            mounted: Some(mounted),
        },
        Err(e) => {
            log::warn!("[constellation] disabled: {:#}", e);
            Constellation { mounted: None }
        }
    }
}

fn try_mount(canvas_id: &str, options: &JsValue) -> anyhow::Result<Mounted> {
    let (window, document) = dom::window_document()?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    dom::style_as_background(&canvas);
    dom::sync_canvas_to_viewport(&canvas);
    let surface = canvas::CanvasSurface::acquire(&canvas)
        .with_context(|| format!("acquiring surface for #{}", canvas_id))?;

    let config = resolve_config(options, &canvas);
    let motion = config.effective_motion(dom::prefers_reduced_motion(&window));
    log::info!(
        "[constellation] mounting on #{} particles={} motion={:?}",
        canvas_id,
        config.particle_count,
        motion
    );

    let tracker = PointerTracker::new();
    let scene = Scene::new(config, motion, tracker.clone());

    // Listener guards are created before the loop; an early return here
    // drops them and detaches the callbacks again.
    let pointer = events::wire_pointermove(&window, tracker)?;
    let resize = events::wire_resize(&window, &canvas)?;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(scene, surface)));
    let render_loop = frame::start_loop(&window, frame_ctx.clone());
    if !render_loop.is_running() {
        anyhow::bail!("frame loop did not start");
    }

    Ok(Mounted {
        render_loop,
        frame_ctx,
        _pointer: pointer,
        _resize: resize,
    })
}

/// Options object, then canvas attribute, then defaults. A bad source is
/// logged and skipped.
fn resolve_config(options: &JsValue, canvas: &web::HtmlCanvasElement) -> ConstellationConfig {
    let from_options = if options.is_undefined() || options.is_null() {
        None
    } else {
        js_sys::JSON::stringify(options)
            .ok()
            .and_then(|s| s.as_string())
    };
    let sources = [
        ("options", from_options),
        ("attribute", dom::config_attribute(canvas)),
    ];
    for (label, text) in sources {
        let Some(text) = text else { continue };
        match ConstellationConfig::from_json(&text) {
            Ok(config) => return config,
            Err(e) => log::warn!("[constellation] ignoring {} config: {}", label, e),
        }
    }
    ConstellationConfig::default()
}
