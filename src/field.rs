// Procedural particle placement.
//
// The field is generated once per mount, as soon as the viewport has a
// usable size, and is never resized, refilled or thinned afterwards.

use crate::constants::{OPACITY_MAX, OPACITY_MIN, RADIUS_MAX, RADIUS_MIN};
use glam::Vec2;
use rand::Rng;

/// Area particles are placed in, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Returns `None` for zero, negative or non-finite dimensions.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        (usable(width) && usable(height)).then_some(Self { width, height })
    }

    #[inline]
    pub fn from_size(size: Vec2) -> Option<Self> {
        Self::new(size.x, size.y)
    }
}

/// A single point of the constellation.
///
/// Fields are private: identity and base attributes are fixed at creation,
/// everything drawn per frame is derived from them.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    id: u32,
    base: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(id: u32, base: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            id,
            base,
            radius,
            opacity,
        }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }
    #[inline]
    pub fn base(&self) -> Vec2 {
        self.base
    }
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
}

impl ParticleField {
    /// Sample `count` particles uniformly inside `bounds`.
    ///
    /// Radius is drawn from `[RADIUS_MIN, RADIUS_MAX)` and base opacity from
    /// `[OPACITY_MIN, OPACITY_MAX)`. Ids are the particle's index.
    pub fn generate<R: Rng + ?Sized>(count: usize, bounds: Bounds, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|i| {
                let base = Vec2::new(
                    rng.gen_range(0.0..bounds.width),
                    rng.gen_range(0.0..bounds.height),
                );
                Particle::new(
                    i as u32,
                    base,
                    rng.gen_range(RADIUS_MIN..RADIUS_MAX),
                    rng.gen_range(OPACITY_MIN..OPACITY_MAX),
                )
            })
            .collect();
        log::debug!(
            "[field] generated {} particles in {:.0}x{:.0}",
            count,
            bounds.width,
            bounds.height
        );
        Self { particles, bounds }
    }

    /// Build a field from explicit particles (fixed layouts, tests).
    #[allow(dead_code)]
    pub fn from_particles(particles: Vec<Particle>, bounds: Bounds) -> Self {
        Self { particles, bounds }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Bounds the field was generated in. Later resizes do not change this.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}
