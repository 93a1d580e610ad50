use crate::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

/// A gradient stop; `offset` runs from 0 (start/center) to 1 (end/rim).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

impl ColorStop {
    #[inline]
    pub const fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

pub type Stops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    /// Gradient laid along a stroked line, from its start to its end.
    Linear(Stops),
    /// Gradient from a disc's center (offset 0) to its rim (offset 1).
    Radial(Stops),
}

impl Paint {
    /// Every offset and alpha in the paint is a finite number.
    pub fn is_finite(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a.is_finite(),
            Paint::Linear(stops) | Paint::Radial(stops) => stops
                .iter()
                .all(|s| s.offset.is_finite() && s.color.a.is_finite()),
        }
    }
}

/// Raster target the render loop draws into.
///
/// Coordinates are viewport CSS pixels; implementations take care of any
/// device pixel ratio scaling.
pub trait Surface {
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, paint: &Paint);
    fn fill_disc(&mut self, center: Vec2, radius: f32, paint: &Paint);
}
