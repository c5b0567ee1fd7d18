//! Konami-style key sequence that triggers a short visual flourish: a global
//! hue rotation plus a burst of emoji particles floating up the screen.

#[cfg(test)]
#[path = "easter_egg_test.rs"]
mod easter_egg_test;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;

use crate::consts::{
    FLOURISH_FILTER, FLOURISH_FILTER_MS, KONAMI_SEQUENCE, PARTICLE_COUNT, PARTICLE_GLYPHS, PARTICLE_LIFETIME_MS,
    PARTICLE_STAGGER_MS,
};

/// Keyframes for the particle float, injected into `<head>` on first use.
pub const FLOAT_UP_KEYFRAMES: &str =
    "@keyframes floatUp { to { transform: translateY(-120vh) rotate(720deg); opacity: 0; } }";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EasterEggConfig {
    /// `KeyboardEvent.key` values to match, in order.
    pub sequence: Vec<String>,
    /// Particle glyphs; each particle picks one at random.
    pub glyphs: Vec<String>,
    pub particle_count: u32,
    /// Gap between consecutive particle spawns.
    pub stagger_ms: u32,
    /// Float animation length; the particle is removed afterwards.
    pub particle_lifetime_ms: u32,
    /// CSS filter applied to `<body>` while the flourish runs.
    pub filter: String,
    pub filter_ms: u32,
}

impl Default for EasterEggConfig {
    fn default() -> Self {
        Self {
            sequence: KONAMI_SEQUENCE.iter().map(|k| (*k).to_owned()).collect(),
            glyphs: PARTICLE_GLYPHS.iter().map(|g| (*g).to_owned()).collect(),
            particle_count: PARTICLE_COUNT,
            stagger_ms: PARTICLE_STAGGER_MS,
            particle_lifetime_ms: PARTICLE_LIFETIME_MS,
            filter: FLOURISH_FILTER.to_owned(),
            filter_ms: FLOURISH_FILTER_MS,
        }
    }
}

/// Matches consecutive key presses against a fixed sequence.
///
/// Any wrong key drops progress to zero; the wrong key itself is not
/// re-checked as a possible first element.
#[derive(Debug, Clone)]
pub struct KeySequence {
    keys: Vec<String>,
    matched: usize,
}

impl KeySequence {
    #[must_use]
    pub fn new(keys: Vec<String>) -> Self {
        Self { keys, matched: 0 }
    }

    /// Number of keys matched so far.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.matched
    }

    /// Feed one key. Returns `true` when this key completes the sequence.
    pub fn press(&mut self, key: &str) -> bool {
        if self.keys.get(self.matched).is_some_and(|expected| expected == key) {
            self.matched += 1;
            if self.matched == self.keys.len() {
                self.matched = 0;
                return true;
            }
        } else {
            self.matched = 0;
        }
        false
    }
}

/// One floating glyph in the flourish.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Spawn delay after activation.
    pub delay_ms: u32,
    pub glyph: String,
    /// Horizontal position, in viewport-width units.
    pub left_vw: f64,
}

impl Particle {
    /// Inline style for the particle element.
    #[must_use]
    pub fn css(&self, lifetime_ms: u32) -> String {
        format!(
            "position: fixed; font-size: 2rem; left: {:.2}vw; top: 100vh; z-index: 9999; \
             pointer-events: none; animation: floatUp {lifetime_ms}ms ease-out forwards;",
            self.left_vw
        )
    }
}

/// Spawn plan for one activation.
pub fn particles<R: Rng + ?Sized>(config: &EasterEggConfig, rng: &mut R) -> Vec<Particle> {
    (0..config.particle_count)
        .map(|i| Particle {
            delay_ms: i.saturating_mul(config.stagger_ms),
            glyph: config.glyphs.choose(rng).cloned().unwrap_or_default(),
            left_vw: rng.random_range(0.0..100.0),
        })
        .collect()
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &EasterEggConfig) -> Result<(), crate::error::Error> {
    use wasm_bindgen::JsCast;
    use web_sys::KeyboardEvent;

    use crate::dom;

    let document = dom::document()?;
    let mut sequence = KeySequence::new(config.sequence.clone());
    let mut rng = dom::page_rng();
    let config = config.clone();
    dom::listen(&document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if sequence.press(&key) {
            activate(&config, &mut rng);
        }
    })
}

#[cfg(feature = "hydrate")]
fn activate(config: &EasterEggConfig, rng: &mut rand::rngs::SmallRng) {
    use gloo_timers::callback::Timeout;

    use crate::dom;

    log::info!("\u{1F3AE} Achievement Unlocked: You found the easter egg!");
    dom::set_body_style("transition", "filter 0.5s ease");
    dom::set_body_style("filter", &config.filter);

    if let Err(err) = ensure_keyframes() {
        log::warn!("easter egg keyframes: {err}");
    }

    let lifetime_ms = config.particle_lifetime_ms;
    for particle in particles(config, rng) {
        Timeout::new(particle.delay_ms, move || {
            if let Err(err) = spawn_particle(&particle, lifetime_ms) {
                log::warn!("easter egg particle: {err}");
            }
        })
        .forget();
    }

    Timeout::new(config.filter_ms, || dom::set_body_style("filter", "")).forget();
}

#[cfg(feature = "hydrate")]
fn ensure_keyframes() -> Result<(), crate::error::Error> {
    use crate::consts::EASTER_EGG_STYLE_ID;
    use crate::dom;
    use crate::error::Error;

    let document = dom::document()?;
    if document.get_element_by_id(EASTER_EGG_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(EASTER_EGG_STYLE_ID);
    style.set_text_content(Some(FLOAT_UP_KEYFRAMES));
    document.head().ok_or(Error::MissingElement("head"))?.append_child(&style)?;
    Ok(())
}

#[cfg(feature = "hydrate")]
fn spawn_particle(particle: &Particle, lifetime_ms: u32) -> Result<(), crate::error::Error> {
    use gloo_timers::callback::Timeout;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlElement;

    use crate::dom;

    let el = dom::document()?.create_element("div")?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    el.set_text_content(Some(&particle.glyph));
    el.style().set_css_text(&particle.css(lifetime_ms));
    dom::body()?.append_child(&el)?;
    Timeout::new(lifetime_ms, move || el.remove()).forget();
    Ok(())
}
