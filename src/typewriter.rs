//! Typewriter text: types a phrase one character at a time, holds it, deletes
//! it, and moves on to the next phrase forever.
//!
//! DESIGN
//! ======
//! The animation is an explicit [`Phase`] machine advanced by [`Typewriter::tick`].
//! Each tick returns the text to render and how long to wait before the next
//! tick, so the host is a plain render-then-sleep loop and the timing rules
//! stay testable without a browser.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

use rand::Rng;
use serde::Deserialize;

use crate::consts::{DELETE_DELAY_MS, TYPE_DELAY_MS, TYPE_JITTER_MS, TYPE_PAUSE_MS, TYPEWRITER_PHRASES};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypewriterConfig {
    /// Phrases shown in order, wrapping around at the end.
    pub phrases: Vec<String>,
    pub type_delay_ms: u32,
    pub delete_delay_ms: u32,
    /// Exclusive upper bound of the random delay added to each keystroke.
    pub jitter_ms: u32,
    /// Extra dwell on a fully typed phrase before deleting starts.
    pub pause_ms: u32,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: TYPEWRITER_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            type_delay_ms: TYPE_DELAY_MS,
            delete_delay_ms: DELETE_DELAY_MS,
            jitter_ms: TYPE_JITTER_MS,
            pause_ms: TYPE_PAUSE_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Appending one character per tick.
    #[default]
    Typing,
    /// Holding the full phrase; the next tick starts deleting.
    Paused,
    /// Removing one character per tick.
    Deleting,
}

/// Output of one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick<'a> {
    /// Text to display until the next tick.
    pub text: &'a str,
    /// Milliseconds until the next tick.
    pub delay_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    phrase_index: usize,
    /// Visible length of the current phrase, in characters.
    char_count: usize,
    phase: Phase,
}

impl Typewriter {
    #[must_use]
    pub fn new(config: TypewriterConfig) -> Self {
        Self { config, phrase_index: 0, char_count: 0, phase: Phase::Typing }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// The currently visible prefix of the current phrase.
    #[must_use]
    pub fn text(&self) -> &str {
        let phrase = self.current_phrase();
        match phrase.char_indices().nth(self.char_count) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    /// Advance the animation by one step.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Tick<'_> {
        let len = self.current_phrase().chars().count();
        match self.phase {
            Phase::Typing => {
                self.char_count = (self.char_count + 1).min(len);
                if self.char_count == len {
                    self.phase = Phase::Paused;
                }
            }
            Phase::Paused | Phase::Deleting => {
                self.phase = Phase::Deleting;
                self.char_count = self.char_count.saturating_sub(1);
                if self.char_count == 0 {
                    self.phase = Phase::Typing;
                    self.phrase_index = (self.phrase_index + 1).checked_rem(self.config.phrases.len()).unwrap_or(0);
                }
            }
        }
        let delay_ms = self.base_delay_ms().saturating_add(jitter(rng, self.config.jitter_ms));
        Tick { text: self.text(), delay_ms }
    }

    /// Keystroke speed follows the phase just entered. A finished phrase
    /// waits one deleting keystroke plus the dwell.
    fn base_delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Typing => self.config.type_delay_ms,
            Phase::Deleting => self.config.delete_delay_ms,
            Phase::Paused => self.config.delete_delay_ms.saturating_add(self.config.pause_ms),
        }
    }

    fn current_phrase(&self) -> &str {
        self.config.phrases.get(self.phrase_index).map_or("", String::as_str)
    }
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, max_ms: u32) -> u32 {
    if max_ms == 0 { 0 } else { rng.random_range(0..max_ms) }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &TypewriterConfig) -> Result<(), crate::error::Error> {
    use gloo_timers::future::TimeoutFuture;

    use crate::consts::TYPEWRITER_ID;
    use crate::dom;

    let Some(target) = dom::document()?.get_element_by_id(TYPEWRITER_ID) else {
        log::debug!("no #{TYPEWRITER_ID}; typewriter skipped");
        return Ok(());
    };

    let mut typewriter = Typewriter::new(config.clone());
    let mut rng = dom::page_rng();
    wasm_bindgen_futures::spawn_local(async move {
        loop {
            let tick = typewriter.tick(&mut rng);
            target.set_text_content(Some(tick.text));
            let delay_ms = tick.delay_ms;
            TimeoutFuture::new(delay_ms).await;
        }
    });
    log::debug!("typewriter started with {} phrases", config.phrases.len());
    Ok(())
}
