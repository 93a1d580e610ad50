// Host-side tests for edge/glyph shading and colors.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/color.rs");
}
mod config {
    include!("../src/config.rs");
}
mod constants {
    include!("../src/constants.rs");
}
mod error {
    include!("../src/error.rs");
}
mod motion {
    include!("../src/motion.rs");
}
mod shading {
    include!("../src/shading.rs");
}
mod surface {
    include!("../src/surface.rs");
}

use color::*;
use config::ConstellationConfig;
use constants::*;
use glam::Vec2;
use shading::*;
use surface::Paint;

fn cfg() -> ConstellationConfig {
    ConstellationConfig::default()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn edge_opacity_is_monotonic_and_zero_at_threshold() {
    let cfg = cfg();
    let mut prev = edge_base_opacity(0.0, &cfg);
    assert!(approx(prev, EDGE_OPACITY_MAX));
    for step in 1..=400 {
        let d = step as f32 * 0.5;
        let o = edge_base_opacity(d, &cfg);
        assert!(o <= prev, "opacity increased at distance {d}");
        if d >= cfg.edge_distance {
            assert_eq!(o, 0.0, "nonzero opacity at distance {d}");
        }
        prev = o;
    }
}

#[test]
fn edge_sixty_pixels_apart_is_015() {
    assert!(approx(edge_base_opacity(60.0, &cfg()), 0.15));
}

#[test]
fn shade_edge_skips_long_edges() {
    let cfg = cfg();
    let a = Vec2::new(10.0, 0.0);
    let b = Vec2::new(500.0, 500.0);
    assert!(shade_edge(a, b, Some(Vec2::ZERO), &cfg).is_none());
    let c = Vec2::new(10.0 + cfg.edge_distance, 0.0);
    assert!(shade_edge(a, c, None, &cfg).is_none());
}

#[test]
fn shade_edge_without_pointer_is_normal() {
    let cfg = cfg();
    let shade = shade_edge(Vec2::new(100.0, 100.0), Vec2::new(160.0, 100.0), None, &cfg)
        .expect("edge within threshold");
    assert!(approx(shade.opacity, 0.15));
    assert_eq!(shade.boost, 0.0);
    assert_eq!(shade.state, EdgeState::Normal);
    match shade.paint(0.0, &cfg) {
        Paint::Solid(c) => {
            assert_eq!([c.r, c.g, c.b], EDGE_RGB);
            assert!(approx(c.a, 0.15));
        }
        other => panic!("expected solid paint, got {other:?}"),
    }
}

#[test]
fn pointer_on_segment_energizes_and_caps() {
    let cfg = cfg();
    let a = Vec2::new(100.0, 100.0);
    let b = Vec2::new(160.0, 100.0);
    let shade = shade_edge(a, b, Some(Vec2::new(130.0, 100.0)), &cfg).unwrap();
    assert!(approx(shade.boost, POINTER_EDGE_BOOST_MAX));
    assert!(approx(shade.opacity, 0.15 + POINTER_EDGE_BOOST_MAX));
    assert!(shade.opacity <= cfg.edge_opacity_cap);
    assert_eq!(shade.state, EdgeState::Energized);
    match shade.paint(2.0, &cfg) {
        Paint::Linear(stops) => {
            assert_eq!(stops.len(), 4);
            assert!(approx(stops[0].offset, 0.0));
            assert!(approx(stops[3].offset, 1.0));
            assert!(stops.iter().all(|s| approx(s.color.a, shade.opacity)));
        }
        other => panic!("expected linear gradient, got {other:?}"),
    }

    // Short edge with the pointer on it: base + boost exceeds a lower cap.
    let capped = ConstellationConfig {
        edge_opacity_cap: 0.8,
        ..cfg
    };
    let short = shade_edge(a, Vec2::new(101.0, 100.0), Some(a), &capped).unwrap();
    assert!(approx(short.opacity, 0.8));
}

#[test]
fn activation_is_keyed_on_boost_fraction() {
    let cfg = cfg();
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(60.0, 0.0);
    let threshold = cfg.edge_activation * cfg.pointer_edge_boost_max;
    // Boost just below the activation level stays normal.
    let below = cfg.pointer_edge_distance * (1.0 - threshold / cfg.pointer_edge_boost_max) + 1.0;
    let shade = shade_edge(a, b, Some(Vec2::new(30.0, below)), &cfg).unwrap();
    assert!(shade.boost > 0.0 && shade.boost < threshold);
    assert_eq!(shade.state, EdgeState::Normal);
    // And just above energizes.
    let above = below - 2.0;
    let shade = shade_edge(a, b, Some(Vec2::new(30.0, above)), &cfg).unwrap();
    assert!(shade.boost > threshold);
    assert_eq!(shade.state, EdgeState::Energized);
}

#[test]
fn endpoint_policy_is_never_closer_than_segment_policy() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(100.0, 0.0);
    for p in [
        Vec2::new(50.0, 10.0),
        Vec2::new(-20.0, 5.0),
        Vec2::new(130.0, -40.0),
        Vec2::new(0.0, 0.0),
    ] {
        let seg = EdgeProximity::Segment.distance(p, a, b);
        let ends = EdgeProximity::Endpoints.distance(p, a, b);
        assert!(ends + 1e-5 >= seg, "endpoints {ends} < segment {seg} for {p:?}");
    }
    let mid = Vec2::new(50.0, 10.0);
    assert!(approx(EdgeProximity::Segment.distance(mid, a, b), 10.0));
    assert!(approx(
        EdgeProximity::Endpoints.distance(mid, a, b),
        (50.0f32 * 50.0 + 10.0 * 10.0).sqrt()
    ));
}

#[test]
fn point_segment_distance_cases() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(10.0, 0.0);
    assert!(approx(point_segment_distance(Vec2::new(5.0, 3.0), a, b), 3.0));
    assert!(approx(point_segment_distance(Vec2::new(-4.0, 3.0), a, b), 5.0));
    assert!(approx(point_segment_distance(Vec2::new(13.0, 4.0), a, b), 5.0));
    // Zero-length segment: no NaN, plain point distance.
    let d = point_segment_distance(Vec2::new(3.0, 4.0), a, a);
    assert!(d.is_finite());
    assert!(approx(d, 5.0));
}

#[test]
fn hover_is_max_on_particle_and_zero_at_radius() {
    let cfg = cfg();
    assert!(approx(hover_intensity(0.0, &cfg), cfg.hover_intensity_max));
    assert_eq!(hover_intensity(cfg.hover_radius, &cfg), 0.0);
    assert_eq!(hover_intensity(cfg.hover_radius + 50.0, &cfg), 0.0);
    assert!(approx(hover_intensity(cfg.hover_radius / 2.0, &cfg), cfg.hover_intensity_max / 2.0));
}

#[test]
fn glyph_under_pointer_grows_brightens_and_glows() {
    let cfg = cfg();
    let center = Vec2::new(200.0, 200.0);
    let shade = shade_glyph(center, 2.0, 0.5, Some(center), &cfg);
    assert!(approx(shade.hover, HOVER_INTENSITY_MAX));
    assert_eq!(shade.opacity, 1.0);
    assert!(approx(shade.radius, 4.0));
    assert!(shade.glowing);
    let (halo_radius, halo) = shade.halo(3, 1.0, &cfg).expect("glowing glyph has a halo");
    assert!(approx(halo_radius, 4.0 * GLOW_RADIUS_SCALE));
    match halo {
        Paint::Radial(stops) => assert!(approx(stops[0].color.a, GLOW_OPACITY)),
        other => panic!("expected radial halo, got {other:?}"),
    }
}

#[test]
fn glyph_away_from_pointer_is_plain() {
    let cfg = cfg();
    let center = Vec2::new(200.0, 200.0);
    for pointer in [None, Some(Vec2::new(900.0, 900.0))] {
        let shade = shade_glyph(center, 1.5, 0.4, pointer, &cfg);
        assert_eq!(shade.hover, 0.0);
        assert_eq!(shade.opacity, 0.4);
        assert_eq!(shade.radius, 1.5);
        assert!(!shade.glowing);
        assert!(shade.halo(0, 0.0, &cfg).is_none());
        assert_eq!(shade.paint(0, 0.0, &cfg), Paint::Radial(palette_glyph_stops(0.4)));
    }
}

#[test]
fn weak_hover_brightens_without_glow() {
    let cfg = cfg();
    let center = Vec2::new(0.0, 0.0);
    // hover = (80 - 60) / 80 * 0.8 = 0.2, below the glow activation
    let shade = shade_glyph(center, 2.0, 0.3, Some(Vec2::new(60.0, 0.0)), &cfg);
    assert!(approx(shade.hover, 0.2));
    assert!(approx(shade.opacity, 0.5));
    assert!(!shade.glowing);
}

#[test]
fn hsl_primaries() {
    assert_eq!(Rgba::from_hsl(0.0, 1.0, 0.5, 1.0), Rgba::rgb([255, 0, 0], 1.0));
    assert_eq!(Rgba::from_hsl(120.0, 1.0, 0.5, 1.0), Rgba::rgb([0, 255, 0], 1.0));
    assert_eq!(Rgba::from_hsl(240.0, 1.0, 0.5, 1.0), Rgba::rgb([0, 0, 255], 1.0));
    assert_eq!(Rgba::from_hsl(360.0, 1.0, 0.5, 1.0), Rgba::from_hsl(0.0, 1.0, 0.5, 1.0));
    assert_eq!(Rgba::from_hsl(-120.0, 1.0, 0.5, 1.0), Rgba::from_hsl(240.0, 1.0, 0.5, 1.0));
}

#[test]
fn css_string_clamps_alpha() {
    assert_eq!(Rgba::rgb(EDGE_RGB, 0.15).css(), "rgba(168, 85, 247, 0.150)");
    assert_eq!(Rgba::rgb([1, 2, 3], 4.0).css(), "rgba(1, 2, 3, 1.000)");
}

#[test]
fn rainbow_rotates_with_time() {
    let speed = 60.0;
    let at_zero = rainbow_stops(0.0, speed, 0.0, 0.5);
    // 1.5 s at 60°/s advances exactly one 90° stop.
    let later = rainbow_stops(1.5, speed, 0.0, 0.5);
    assert_eq!(later[0].color, at_zero[1].color);
    assert_eq!(later[2].color, at_zero[3].color);
    assert_ne!(later[0].color, at_zero[0].color);
}

#[test]
fn rotating_hue_wraps() {
    assert!(approx(rotating_hue(0.0, 60.0, 0.0), 0.0));
    assert!(approx(rotating_hue(7.0, 60.0, 0.0), 60.0));
    assert!(approx(rotating_hue(0.0, 60.0, -30.0), 330.0));
}
