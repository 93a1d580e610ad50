use crate::canvas::CanvasSurface;
use crate::lifecycle::{FrameRequest, FrameScheduler, RenderLoop};
use crate::scene::Scene;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub scene: Scene,
    pub surface: CanvasSurface,
    pub started: Instant,
    pub reported_skips: bool,
}

impl FrameContext {
    pub fn new(scene: Scene, surface: CanvasSurface) -> Self {
        Self {
            scene,
            surface,
            started: Instant::now(),
            reported_skips: false,
        }
    }

    pub fn frame(&mut self) {
        let t = self.started.elapsed().as_secs_f32();
        self.surface.sync();
        let stats = self.scene.render(&mut self.surface, t);
        log::trace!(
            "[frame] edges={} energized={} glyphs={} halos={}",
            stats.edges,
            stats.energized_edges,
            stats.glyphs,
            stats.halos
        );
        if stats.skipped > 0 && !self.reported_skips {
            log::warn!(
                "[frame] skipped {} primitives with non-finite values at t={:.2}s",
                stats.skipped,
                t
            );
            self.reported_skips = true;
        }
    }
}

/// `requestAnimationFrame` driving whatever closure sits in the tick slot.
#[derive(Clone)]
struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameRequest> {
        let slot = self.tick.borrow();
        let tick = slot.as_ref()?;
        self.window
            .request_animation_frame(tick.as_ref().unchecked_ref())
            .map(FrameRequest)
            .map_err(|e| log::error!("requestAnimationFrame error: {:?}", e))
            .ok()
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        _ = self.window.cancel_animation_frame(request.0);
    }
}

/// Cancellation handle for a running frame loop; stops it when dropped.
pub struct LoopHandle {
    render_loop: Rc<RefCell<Option<RenderLoop>>>,
    scheduler: RafScheduler,
}

impl LoopHandle {
    pub fn is_running(&self) -> bool {
        self.render_loop
            .borrow()
            .as_ref()
            .is_some_and(RenderLoop::is_running)
    }

    pub fn frames(&self) -> u64 {
        self.render_loop
            .borrow()
            .as_ref()
            .map_or(0, RenderLoop::frames)
    }

    pub fn stop(&mut self) {
        if let Some(rl) = self.render_loop.borrow_mut().as_mut() {
            rl.stop(&mut self.scheduler);
        }
        // The tick closure holds clones of the slot; emptying it breaks the cycle.
        let tick = self.scheduler.tick.borrow_mut().take();
        drop(tick);
    }
}

impl Drop for LoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn start_loop(window: &web::Window, frame_ctx: Rc<RefCell<FrameContext>>) -> LoopHandle {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let mut scheduler = RafScheduler {
        window: window.clone(),
        tick: tick.clone(),
    };
    let render_loop: Rc<RefCell<Option<RenderLoop>>> = Rc::new(RefCell::new(None));

    let mut tick_scheduler = scheduler.clone();
    let tick_loop = render_loop.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(rl) = tick_loop.borrow_mut().as_mut() {
            rl.tick(&mut tick_scheduler, || frame_ctx.borrow_mut().frame());
        }
    }) as Box<dyn FnMut()>));

    *render_loop.borrow_mut() = Some(RenderLoop::start(&mut scheduler));
    LoopHandle {
        render_loop,
        scheduler,
    }
}
