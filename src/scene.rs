// One frame of the constellation: clear, derive positions, edges, glyphs.

use crate::config::ConstellationConfig;
use crate::field::{Bounds, ParticleField};
use crate::motion::{MotionModel, MotionParams};
use crate::pointer::PointerTracker;
use crate::shading::{self, EdgeState};
use crate::surface::{Paint, Surface};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What a single `Scene::render` call put on the surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub edges: usize,
    pub energized_edges: usize,
    pub glyphs: usize,
    pub halos: usize,
    /// Glyphs, halos and edge paints dropped because a value was not finite.
    ///
    /// A particle at a non-finite position counts once, for its glyph. Pairs
    /// it belongs to are never measured, so they add nothing here.
    pub skipped: usize,
}

pub struct Scene {
    config: ConstellationConfig,
    motion: MotionModel,
    motion_params: MotionParams,
    pointer: PointerTracker,
    rng: StdRng,
    field: Option<ParticleField>,
    // Per-frame scratch, reused to avoid reallocating every tick.
    positions: Vec<Vec2>,
    valid: Vec<bool>,
}

impl Scene {
    pub fn new(config: ConstellationConfig, motion: MotionModel, pointer: PointerTracker) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            motion_params: config.motion_params(),
            config,
            motion,
            pointer,
            rng,
            field: None,
            positions: Vec::new(),
            valid: Vec::new(),
        }
    }

    /// Start from an existing field instead of generating one.
    #[allow(dead_code)]
    pub fn with_field(mut self, field: ParticleField) -> Self {
        self.field = Some(field);
        self
    }

    /// `None` until the surface first reported usable bounds.
    #[inline]
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    /// Rendered positions from the most recent frame, indexed by particle id.
    #[inline]
    #[allow(dead_code)]
    pub fn rendered_positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Draw one frame for elapsed time `t` (seconds since mount).
    pub fn render(&mut self, surface: &mut dyn Surface, t: f32) -> FrameStats {
        let mut stats = FrameStats::default();
        surface.clear();

        if self.field.is_none() {
            match Bounds::from_size(surface.size()) {
                Some(bounds) => {
                    let field =
                        ParticleField::generate(self.config.particle_count, bounds, &mut self.rng);
                    log::info!(
                        "[scene] {} particles in {}x{}",
                        field.len(),
                        field.bounds().width,
                        field.bounds().height
                    );
                    self.field = Some(field);
                }
                None => return stats,
            }
        }
        let Some(field) = self.field.as_ref().filter(|f| !f.is_empty()) else {
            return stats;
        };

        self.positions.clear();
        self.valid.clear();
        for p in field.particles() {
            let pos = self
                .motion
                .position(p.base(), p.id(), t, &self.motion_params);
            self.positions.push(pos);
            self.valid.push(pos.is_finite());
        }

        let cfg = &self.config;
        let pointer = self.pointer.latest();

        // Edges first so glyphs sit on top of them.
        let n = self.positions.len();
        for i in 0..n {
            if !self.valid[i] {
                continue;
            }
            for j in (i + 1)..n {
                if !self.valid[j] {
                    continue;
                }
                let (a, b) = (self.positions[i], self.positions[j]);
                let Some(shade) = shading::shade_edge(a, b, pointer, cfg) else {
                    continue;
                };
                let paint = shade.paint(t, cfg);
                if !shade.opacity.is_finite() || !paint.is_finite() {
                    stats.skipped += 1;
                    continue;
                }
                surface.stroke_line(a, b, cfg.edge_width, &paint);
                stats.edges += 1;
                if shade.state == EdgeState::Energized {
                    stats.energized_edges += 1;
                }
            }
        }

        for (i, p) in field.particles().iter().enumerate() {
            if !self.valid[i] {
                stats.skipped += 1;
                continue;
            }
            let center = self.positions[i];
            let shade = shading::shade_glyph(center, p.radius(), p.opacity(), pointer, cfg);
            if !(shade.radius.is_finite() && shade.opacity.is_finite()) {
                stats.skipped += 1;
                continue;
            }
            if let Some((halo_radius, halo)) = shade.halo(p.id(), t, cfg) {
                if draw_disc(surface, center, halo_radius, &halo) {
                    stats.halos += 1;
                } else {
                    stats.skipped += 1;
                }
            }
            if draw_disc(surface, center, shade.radius, &shade.paint(p.id(), t, cfg)) {
                stats.glyphs += 1;
            } else {
                stats.skipped += 1;
            }
        }

        stats
    }
}

fn draw_disc(surface: &mut dyn Surface, center: Vec2, radius: f32, paint: &Paint) -> bool {
    if !(radius.is_finite() && radius > 0.0 && paint.is_finite()) {
        return false;
    }
    surface.fill_disc(center, radius, paint);
    true
}
