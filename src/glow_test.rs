#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn starts_at_origin() {
    let glow = Glow::new(0.1);
    assert_eq!(glow.current(), Point::new(0.0, 0.0));
    assert_eq!(glow.target(), Point::new(0.0, 0.0));
}

#[test]
fn step_covers_ten_percent_of_remaining_distance() {
    let mut glow = Glow::new(GlowConfig::default().smoothing);
    glow.set_target(Point::new(100.0, 200.0));
    let first = glow.step();
    assert!(approx_eq(first.x, 10.0));
    assert!(approx_eq(first.y, 20.0));
    let second = glow.step();
    assert!(approx_eq(second.x, 19.0));
    assert!(approx_eq(second.y, 38.0));
}

#[test]
fn converges_without_overshoot() {
    let mut glow = Glow::new(0.1);
    glow.set_target(Point::new(500.0, -300.0));
    let mut last = glow.current();
    for _ in 0..300 {
        let at = glow.step();
        assert!(at.x >= last.x && at.x <= 500.0);
        assert!(at.y <= last.y && at.y >= -300.0);
        last = at;
    }
    assert!((last.x - 500.0).abs() < 0.01);
    assert!((last.y + 300.0).abs() < 0.01);
}

#[test]
fn retargeting_mid_flight() {
    let mut glow = Glow::new(0.5);
    glow.set_target(Point::new(100.0, 0.0));
    glow.step();
    glow.set_target(Point::new(0.0, 0.0));
    let at = glow.step();
    assert!(approx_eq(at.x, 25.0));
}

#[test]
fn full_smoothing_snaps_to_target() {
    let mut glow = Glow::new(1.0);
    glow.set_target(Point::new(42.0, 7.0));
    assert_eq!(glow.step(), Point::new(42.0, 7.0));
}

#[test]
fn css_uses_size_and_color() {
    let css = GlowConfig::default().css();
    assert!(css.contains("width: 300px; height: 300px"));
    assert!(css.contains("rgba(34, 211, 238, 0.08) 0%"));
    assert!(css.contains("pointer-events: none"));
    assert!(css.contains("translate(-50%, -50%)"));
}
