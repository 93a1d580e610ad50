// Default tuning for the constellation background.
// Distances are CSS pixels, opacities 0..1, angular rates radians per second
// unless the name ends in _DEG.

// Field
pub const PARTICLE_COUNT: usize = 50;
pub const MAX_PARTICLE_COUNT: usize = 500; // keeps the pair pass within a frame budget
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_MAX: f32 = 3.0; // exclusive
pub const OPACITY_MIN: f32 = 0.2;
pub const OPACITY_MAX: f32 = 1.0; // exclusive

// Animated motion model
pub const AMPLITUDE_X: f32 = 25.0;
pub const AMPLITUDE_Y: f32 = 20.0;
pub const FREQUENCY_X: f32 = 0.4;
pub const FREQUENCY_Y: f32 = 0.3;

// Edges
pub const EDGE_DISTANCE: f32 = 120.0;
pub const EDGE_OPACITY_MAX: f32 = 0.3; // baseline opacity of a zero-length edge
pub const EDGE_WIDTH: f32 = 1.0;
pub const POINTER_EDGE_DISTANCE: f32 = 100.0;
pub const POINTER_EDGE_BOOST_MAX: f32 = 0.6;
pub const EDGE_OPACITY_CAP: f32 = 0.9;
pub const EDGE_ACTIVATION: f32 = 0.2; // fraction of the max boost that energizes an edge

// Glyphs
pub const HOVER_RADIUS: f32 = 80.0;
pub const HOVER_INTENSITY_MAX: f32 = 0.8;
pub const HOVER_SIZE_BOOST: f32 = 2.5; // px per unit of hover intensity
pub const GLOW_ACTIVATION: f32 = 0.3;
pub const GLOW_RADIUS_SCALE: f32 = 3.0;
pub const GLOW_OPACITY: f32 = 0.25;

// Hue rotation for energized edges and glowing glyphs
pub const HUE_SPEED_DEG: f32 = 60.0;
pub const HUE_STOP_STEP_DEG: f32 = 90.0;
pub const PARTICLE_HUE_STEP_DEG: f32 = 37.0; // desynchronizes neighbouring glows
pub const RAINBOW_SATURATION: f32 = 0.9;
pub const RAINBOW_LIGHTNESS: f32 = 0.62;

// Palette (sRGB 0..255)
pub const EDGE_RGB: [u8; 3] = [168, 85, 247]; // purple
pub const GLYPH_CORE_RGB: [u8; 3] = [255, 255, 255];
pub const GLYPH_MID_RGB: [u8; 3] = [196, 181, 253]; // lavender
pub const GLYPH_EDGE_RGB: [u8; 3] = [59, 130, 246]; // blue

// DOM
pub const DEFAULT_CANVAS_ID: &str = "constellation";
pub const CONFIG_ATTRIBUTE: &str = "data-constellation";
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
