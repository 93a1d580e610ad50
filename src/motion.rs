use glam::Vec2;
use serde::Deserialize;

/// How rendered positions are derived from base positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionModel {
    /// Rendered position equals base position.
    Static,
    /// Base position plus a slow per-particle oscillation.
    #[default]
    Animated,
}

/// Oscillation amplitude (px) and angular frequency (rad/s) per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub amplitude: Vec2,
    pub frequency: Vec2,
}

impl MotionModel {
    /// Rendered position of a particle at elapsed time `t` seconds.
    ///
    /// A pure function of `(base, id, t)`: neighbours never influence it, so
    /// any frame can be reproduced by fixing `t`.
    #[inline]
    pub fn position(self, base: Vec2, id: u32, t: f32, params: &MotionParams) -> Vec2 {
        match self {
            MotionModel::Static => base,
            MotionModel::Animated => {
                let phase = id as f32;
                base + Vec2::new(
                    params.amplitude.x * (params.frequency.x * t + phase).sin(),
                    params.amplitude.y * (params.frequency.y * t + phase).cos(),
                )
            }
        }
    }
}
