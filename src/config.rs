// Runtime configuration for the constellation background.
//
// Every field has a default from `constants.rs`; a JSON source only needs to
// name the fields it overrides, e.g. `{"particleCount": 80, "motion": "static"}`.

use crate::constants::*;
use crate::error::ConfigError;
use crate::motion::{MotionModel, MotionParams};
use crate::shading::EdgeProximity;
use glam::Vec2;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ConstellationConfig {
    pub particle_count: usize,
    pub motion: MotionModel,
    /// Fall back to `MotionModel::Static` when the user asks for reduced motion.
    pub respect_reduced_motion: bool,
    pub amplitude_x: f32,
    pub amplitude_y: f32,
    pub frequency_x: f32,
    pub frequency_y: f32,

    pub edge_distance: f32,
    pub edge_opacity_max: f32,
    pub edge_width: f32,
    pub pointer_edge_distance: f32,
    pub pointer_edge_boost_max: f32,
    pub edge_opacity_cap: f32,
    pub edge_activation: f32,
    pub proximity: EdgeProximity,

    pub hover_radius: f32,
    pub hover_intensity_max: f32,
    pub hover_size_boost: f32,
    pub glow_activation: f32,

    /// Degrees per second of the energized hue rotation.
    pub hue_speed: f32,
    /// Fixed seed for a reproducible layout; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ConstellationConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            motion: MotionModel::Animated,
            respect_reduced_motion: true,
            amplitude_x: AMPLITUDE_X,
            amplitude_y: AMPLITUDE_Y,
            frequency_x: FREQUENCY_X,
            frequency_y: FREQUENCY_Y,
            edge_distance: EDGE_DISTANCE,
            edge_opacity_max: EDGE_OPACITY_MAX,
            edge_width: EDGE_WIDTH,
            pointer_edge_distance: POINTER_EDGE_DISTANCE,
            pointer_edge_boost_max: POINTER_EDGE_BOOST_MAX,
            edge_opacity_cap: EDGE_OPACITY_CAP,
            edge_activation: EDGE_ACTIVATION,
            proximity: EdgeProximity::Segment,
            hover_radius: HOVER_RADIUS,
            hover_intensity_max: HOVER_INTENSITY_MAX,
            hover_size_boost: HOVER_SIZE_BOOST,
            glow_activation: GLOW_ACTIVATION,
            hue_speed: HUE_SPEED_DEG,
            seed: None,
        }
    }
}

impl ConstellationConfig {
    /// Parse and validate a JSON object. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::OutOfRange {
                field: "particleCount",
                value: self.particle_count as f64,
            });
        }
        let positive = [
            ("edgeDistance", self.edge_distance),
            ("edgeWidth", self.edge_width),
            ("pointerEdgeDistance", self.pointer_edge_distance),
            ("hoverRadius", self.hover_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(out_of_range(field, value));
            }
        }
        // A negative boost would shrink hovered glyphs to nothing.
        if !(self.hover_size_boost.is_finite() && self.hover_size_boost >= 0.0) {
            return Err(out_of_range("hoverSizeBoost", self.hover_size_boost));
        }
        let unit = [
            ("edgeOpacityMax", self.edge_opacity_max),
            ("pointerEdgeBoostMax", self.pointer_edge_boost_max),
            ("edgeOpacityCap", self.edge_opacity_cap),
            ("edgeActivation", self.edge_activation),
            ("hoverIntensityMax", self.hover_intensity_max),
            ("glowActivation", self.glow_activation),
        ];
        for (field, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(out_of_range(field, value));
            }
        }
        let finite = [
            ("amplitudeX", self.amplitude_x),
            ("amplitudeY", self.amplitude_y),
            ("frequencyX", self.frequency_x),
            ("frequencyY", self.frequency_y),
            ("hueSpeed", self.hue_speed),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(out_of_range(field, value));
            }
        }
        Ok(())
    }

    /// Effective motion model once the reduced-motion preference is known.
    pub fn effective_motion(&self, prefers_reduced_motion: bool) -> MotionModel {
        if self.respect_reduced_motion && prefers_reduced_motion {
            MotionModel::Static
        } else {
            self.motion
        }
    }

    #[inline]
    pub fn motion_params(&self) -> MotionParams {
        MotionParams {
            amplitude: Vec2::new(self.amplitude_x, self.amplitude_y),
            frequency: Vec2::new(self.frequency_x, self.frequency_y),
        }
    }
}

fn out_of_range(field: &'static str, value: f32) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value: value as f64,
    }
}
