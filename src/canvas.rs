use crate::error::EnvError;
use crate::surface::{ColorStop, Paint, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Surface` backed by a Canvas 2D context.
///
/// Drawing happens in CSS pixels; `sync` re-reads the backing store size and
/// installs the device-pixel-ratio transform once per frame.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    size: Vec2,
}

impl CanvasSurface {
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Result<Self, EnvError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| EnvError::ContextUnavailable {
                reason: format!("{:?}", e),
            })?
            .ok_or_else(|| EnvError::ContextUnavailable {
                reason: "canvas returned no 2d context".to_owned(),
            })?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| EnvError::ContextUnavailable {
                reason: "context is not a CanvasRenderingContext2d".to_owned(),
            })?;
        let mut surface = Self {
            canvas: canvas.clone(),
            ctx,
            size: Vec2::ZERO,
        };
        surface.sync();
        Ok(surface)
    }

    /// Pick up any resize that happened since the last frame.
    pub fn sync(&mut self) {
        let dpr = web::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|d| *d > 0.0)
            .unwrap_or(1.0);
        self.size = Vec2::new(
            (self.canvas.width() as f64 / dpr) as f32,
            (self.canvas.height() as f64 / dpr) as f32,
        );
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    }

    fn gradient(&self, gradient: web::CanvasGradient, stops: &[ColorStop]) -> web::CanvasGradient {
        for s in stops {
            _ = gradient.add_color_stop(s.offset.clamp(0.0, 1.0), &s.color.css());
        }
        gradient
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.size.x as f64, self.size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_stroke_style_str(&c.css()),
            Paint::Linear(stops) | Paint::Radial(stops) => {
                let g = self.ctx.create_linear_gradient(
                    from.x as f64,
                    from.y as f64,
                    to.x as f64,
                    to.y as f64,
                );
                self.ctx
                    .set_stroke_style_canvas_gradient(&self.gradient(g, stops));
            }
        }
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        let (cx, cy, r) = (center.x as f64, center.y as f64, radius as f64);
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.css()),
            Paint::Radial(stops) | Paint::Linear(stops) => {
                match self.ctx.create_radial_gradient(cx, cy, 0.0, cx, cy, r) {
                    Ok(g) => self
                        .ctx
                        .set_fill_style_canvas_gradient(&self.gradient(g, stops)),
                    Err(e) => {
                        log::warn!("[canvas] radial gradient error: {:?}", e);
                        return;
                    }
                }
            }
        }
        self.ctx.begin_path();
        if self.ctx.arc(cx, cy, r, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }
}
