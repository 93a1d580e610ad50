// Colors and gradient stop builders shared by the edge and glyph passes.

use crate::constants::{
    GLYPH_CORE_RGB, GLYPH_EDGE_RGB, GLYPH_MID_RGB, HUE_STOP_STEP_DEG, RAINBOW_LIGHTNESS,
    RAINBOW_SATURATION,
};
use crate::surface::{ColorStop, Stops};
use smallvec::smallvec;

/// sRGB color with straight (non-premultiplied) alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    #[inline]
    pub const fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// `hue` in degrees (any range), `saturation`/`lightness` in \[0, 1\].
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, a: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
        Self {
            r: to_u8(r),
            g: to_u8(g),
            b: to_u8(b),
            a,
        }
    }

    /// CSS color string accepted by canvas stroke/fill styles.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// Hue of the first rainbow stop at time `t`.
#[inline]
pub fn rotating_hue(t: f32, hue_speed: f32, phase_deg: f32) -> f32 {
    (t * hue_speed + phase_deg).rem_euclid(360.0)
}

/// Four evenly spaced stops whose hues sit 90° apart and rotate with `t`.
pub fn rainbow_stops(t: f32, hue_speed: f32, phase_deg: f32, alpha: f32) -> Stops {
    let hue0 = rotating_hue(t, hue_speed, phase_deg);
    (0..4)
        .map(|k| {
            ColorStop::new(
                k as f32 / 3.0,
                Rgba::from_hsl(
                    hue0 + k as f32 * HUE_STOP_STEP_DEG,
                    RAINBOW_SATURATION,
                    RAINBOW_LIGHTNESS,
                    alpha,
                ),
            )
        })
        .collect()
}

/// Resting glyph: white core through lavender to a transparent blue rim.
pub fn palette_glyph_stops(alpha: f32) -> Stops {
    smallvec![
        ColorStop::new(0.0, Rgba::rgb(GLYPH_CORE_RGB, alpha)),
        ColorStop::new(0.5, Rgba::rgb(GLYPH_MID_RGB, alpha * 0.6)),
        ColorStop::new(1.0, Rgba::rgb(GLYPH_EDGE_RGB, 0.0)),
    ]
}

/// Hovered glyph: white core into a rotating hue, fading out at the rim.
pub fn energized_glyph_stops(t: f32, hue_speed: f32, phase_deg: f32, alpha: f32) -> Stops {
    let hue = rotating_hue(t, hue_speed, phase_deg);
    smallvec![
        ColorStop::new(0.0, Rgba::rgb(GLYPH_CORE_RGB, alpha)),
        ColorStop::new(
            0.4,
            Rgba::from_hsl(hue, RAINBOW_SATURATION, RAINBOW_LIGHTNESS, alpha * 0.8)
        ),
        ColorStop::new(
            1.0,
            Rgba::from_hsl(
                hue + HUE_STOP_STEP_DEG,
                RAINBOW_SATURATION,
                RAINBOW_LIGHTNESS,
                0.0
            )
        ),
    ]
}

/// Soft halo beneath a hovered glyph.
pub fn glow_stops(t: f32, hue_speed: f32, phase_deg: f32, alpha: f32) -> Stops {
    let hue = rotating_hue(t, hue_speed, phase_deg);
    smallvec![
        ColorStop::new(
            0.0,
            Rgba::from_hsl(hue, RAINBOW_SATURATION, RAINBOW_LIGHTNESS, alpha)
        ),
        ColorStop::new(
            1.0,
            Rgba::from_hsl(hue, RAINBOW_SATURATION, RAINBOW_LIGHTNESS, 0.0)
        ),
    ]
}
