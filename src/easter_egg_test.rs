use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn konami() -> KeySequence {
    KeySequence::new(EasterEggConfig::default().sequence)
}

/// Feed every key, returning how many times the sequence fired.
fn activations(seq: &mut KeySequence, keys: &[&str]) -> usize {
    keys.iter().filter(|key| seq.press(key)).count()
}

const CODE: [&str; 10] =
    ["ArrowUp", "ArrowUp", "ArrowDown", "ArrowDown", "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowRight", "b", "a"];

// =============================================================
// KeySequence
// =============================================================

#[test]
fn default_sequence_is_ten_keys() {
    assert_eq!(EasterEggConfig::default().sequence, CODE);
}

#[test]
fn exact_sequence_activates_once() {
    let mut seq = konami();
    assert_eq!(activations(&mut seq, &CODE), 1);
    assert_eq!(seq.progress(), 0);
}

#[test]
fn only_last_key_activates() {
    let mut seq = konami();
    for key in &CODE[..9] {
        assert!(!seq.press(key));
    }
    assert_eq!(seq.progress(), 9);
    assert!(seq.press("a"));
}

#[test]
fn wrong_key_resets_progress() {
    let mut seq = konami();
    activations(&mut seq, &CODE[..6]);
    assert_eq!(seq.progress(), 6);
    assert!(!seq.press("x"));
    assert_eq!(seq.progress(), 0);
}

#[test]
fn inserted_wrong_key_never_activates() {
    for pos in 1..CODE.len() {
        let mut keys: Vec<&str> = CODE.to_vec();
        keys.insert(pos, "Enter");
        let mut seq = konami();
        assert_eq!(activations(&mut seq, &keys), 0, "wrong key at position {pos}");
    }
}

#[test]
fn wrong_key_before_or_after_is_harmless() {
    let mut before = vec!["Enter"];
    before.extend_from_slice(&CODE);
    assert_eq!(activations(&mut konami(), &before), 1);

    let mut after = CODE.to_vec();
    after.push("Enter");
    assert_eq!(activations(&mut konami(), &after), 1);
}

#[test]
fn mismatched_key_is_not_rechecked_as_start() {
    let mut seq = konami();
    seq.press("ArrowUp");
    seq.press("ArrowUp");
    // A third ArrowUp is a mismatch and resets without counting as a new start.
    seq.press("ArrowUp");
    assert_eq!(seq.progress(), 0);
    assert_eq!(activations(&mut seq, &CODE[1..]), 0);
}

#[test]
fn sequence_can_fire_repeatedly() {
    let mut seq = konami();
    let mut keys = CODE.to_vec();
    keys.extend_from_slice(&CODE);
    assert_eq!(activations(&mut seq, &keys), 2);
}

#[test]
fn keys_are_case_sensitive() {
    let mut seq = konami();
    activations(&mut seq, &CODE[..8]);
    assert!(!seq.press("B"));
    assert_eq!(seq.progress(), 0);
}

#[test]
fn empty_sequence_never_fires() {
    let mut seq = KeySequence::new(Vec::new());
    assert_eq!(activations(&mut seq, &CODE), 0);
}

// =============================================================
// Particles
// =============================================================

#[test]
fn particle_plan_is_staggered() {
    let config = EasterEggConfig::default();
    let plan = particles(&config, &mut SmallRng::seed_from_u64(1));
    assert_eq!(plan.len(), 20);
    for (i, particle) in plan.iter().enumerate() {
        assert_eq!(particle.delay_ms as usize, i * 100);
    }
}

#[test]
fn particles_use_configured_glyphs_and_viewport_width() {
    let config = EasterEggConfig::default();
    let plan = particles(&config, &mut SmallRng::seed_from_u64(2));
    for particle in &plan {
        assert!(config.glyphs.contains(&particle.glyph));
        assert!((0.0..100.0).contains(&particle.left_vw));
    }
}

#[test]
fn same_seed_same_plan() {
    let config = EasterEggConfig::default();
    let a = particles(&config, &mut SmallRng::seed_from_u64(9));
    let b = particles(&config, &mut SmallRng::seed_from_u64(9));
    assert_eq!(a, b);
}

#[test]
fn particle_css_positions_and_animates() {
    let particle = Particle { delay_ms: 0, glyph: "x".to_owned(), left_vw: 42.5 };
    let css = particle.css(3000);
    assert!(css.contains("left: 42.50vw"));
    assert!(css.contains("animation: floatUp 3000ms ease-out forwards"));
    assert!(css.contains("pointer-events: none"));
}

#[test]
fn keyframes_float_up_and_fade() {
    assert!(FLOAT_UP_KEYFRAMES.starts_with("@keyframes floatUp"));
    assert!(FLOAT_UP_KEYFRAMES.contains("rotate(720deg)"));
    assert!(FLOAT_UP_KEYFRAMES.contains("opacity: 0"));
}
