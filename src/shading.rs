// Opacity, size and color rules for edges and particle glyphs.
//
// All functions are pure and take distances in CSS pixels.

use crate::color::{self, Rgba};
use crate::config::ConstellationConfig;
use crate::constants::{EDGE_RGB, GLOW_OPACITY, GLOW_RADIUS_SCALE, PARTICLE_HUE_STEP_DEG};
use crate::surface::Paint;
use glam::Vec2;
use serde::Deserialize;

/// Linear ramp from `peak` at distance 0 down to 0 at `radius` and beyond.
#[inline]
pub fn linear_falloff(distance: f32, radius: f32, peak: f32) -> f32 {
    if distance < radius {
        (radius - distance) / radius * peak
    } else {
        0.0
    }
}

/// Shortest distance from `p` to the segment `a`–`b`.
///
/// A degenerate segment (`a == b`) collapses to the point distance.
pub fn point_segment_distance(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// How the pointer's distance to an edge is measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeProximity {
    /// Distance to the closest point on the segment.
    #[default]
    Segment,
    /// Distance to the closer of the two endpoints.
    Endpoints,
}

impl EdgeProximity {
    #[inline]
    pub fn distance(self, pointer: Vec2, a: Vec2, b: Vec2) -> f32 {
        match self {
            EdgeProximity::Segment => point_segment_distance(pointer, a, b),
            EdgeProximity::Endpoints => pointer.distance(a).min(pointer.distance(b)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeState {
    Normal,
    Energized,
}

/// Resolved look of one edge for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeShade {
    pub opacity: f32,
    #[allow(dead_code)]
    pub boost: f32,
    pub state: EdgeState,
}

/// Baseline opacity of an edge of length `distance`; 0 once it reaches
/// the edge threshold.
#[inline]
pub fn edge_base_opacity(distance: f32, cfg: &ConstellationConfig) -> f32 {
    linear_falloff(distance, cfg.edge_distance, cfg.edge_opacity_max)
}

/// Extra opacity for an edge the pointer is near.
#[inline]
pub fn pointer_boost(pointer_distance: f32, cfg: &ConstellationConfig) -> f32 {
    linear_falloff(
        pointer_distance,
        cfg.pointer_edge_distance,
        cfg.pointer_edge_boost_max,
    )
}

/// Shade the edge `a`–`b`, or `None` when it is too long to be drawn.
pub fn shade_edge(
    a: Vec2,
    b: Vec2,
    pointer: Option<Vec2>,
    cfg: &ConstellationConfig,
) -> Option<EdgeShade> {
    let base = edge_base_opacity(a.distance(b), cfg);
    if base <= 0.0 {
        return None;
    }
    let boost = pointer
        .map(|p| pointer_boost(cfg.proximity.distance(p, a, b), cfg))
        .unwrap_or(0.0);
    let state = if boost > cfg.edge_activation * cfg.pointer_edge_boost_max {
        EdgeState::Energized
    } else {
        EdgeState::Normal
    };
    Some(EdgeShade {
        opacity: (base + boost).min(cfg.edge_opacity_cap),
        boost,
        state,
    })
}

impl EdgeShade {
    pub fn paint(&self, t: f32, cfg: &ConstellationConfig) -> Paint {
        match self.state {
            EdgeState::Normal => Paint::Solid(Rgba::rgb(EDGE_RGB, self.opacity)),
            EdgeState::Energized => {
                Paint::Linear(color::rainbow_stops(t, cfg.hue_speed, 0.0, self.opacity))
            }
        }
    }
}

/// How strongly the pointer highlights a particle at `distance`.
#[inline]
pub fn hover_intensity(distance: f32, cfg: &ConstellationConfig) -> f32 {
    linear_falloff(distance, cfg.hover_radius, cfg.hover_intensity_max)
}

/// Resolved look of one particle glyph for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphShade {
    pub hover: f32,
    pub opacity: f32,
    pub radius: f32,
    pub glowing: bool,
}

pub fn shade_glyph(
    center: Vec2,
    base_radius: f32,
    base_opacity: f32,
    pointer: Option<Vec2>,
    cfg: &ConstellationConfig,
) -> GlyphShade {
    let hover = pointer
        .map(|p| hover_intensity(p.distance(center), cfg))
        .unwrap_or(0.0);
    GlyphShade {
        hover,
        opacity: (base_opacity + hover).min(1.0),
        radius: base_radius + hover * cfg.hover_size_boost,
        glowing: hover > cfg.glow_activation,
    }
}

impl GlyphShade {
    #[inline]
    fn hue_phase(id: u32) -> f32 {
        id as f32 * PARTICLE_HUE_STEP_DEG
    }

    pub fn paint(&self, id: u32, t: f32, cfg: &ConstellationConfig) -> Paint {
        if self.glowing {
            Paint::Radial(color::energized_glyph_stops(
                t,
                cfg.hue_speed,
                Self::hue_phase(id),
                self.opacity,
            ))
        } else {
            Paint::Radial(color::palette_glyph_stops(self.opacity))
        }
    }

    /// Halo radius and paint, only while the glyph is glowing.
    pub fn halo(&self, id: u32, t: f32, cfg: &ConstellationConfig) -> Option<(f32, Paint)> {
        self.glowing.then(|| {
            let alpha = GLOW_OPACITY * self.hover / cfg.hover_intensity_max.max(f32::EPSILON);
            (
                self.radius * GLOW_RADIUS_SCALE,
                Paint::Radial(color::glow_stops(
                    t,
                    cfg.hue_speed,
                    Self::hue_phase(id),
                    alpha,
                )),
            )
        })
    }
}
