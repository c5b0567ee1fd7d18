//! Scroll animations: one-shot reveals on viewport entry, plus a parallax
//! offset on the decorative background shapes.
//!
//! Each `[data-aos]` element moves through `Observed -> Pending -> Revealed`
//! exactly once. The host stops observing an element as soon as it starts
//! pending, so a second intersection can never re-arm it.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use serde::Deserialize;

use crate::consts::{PARALLAX_SPEEDS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealConfig {
    /// Visible fraction that counts as intersecting.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
    /// Parallax multiplier per decorative shape, in document order.
    pub parallax_speeds: Vec<f64>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            parallax_speeds: PARALLAX_SPEEDS.to_vec(),
        }
    }
}

/// Index of an element registered with a [`RevealTracker`].
pub type RevealId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    /// Waiting to enter the viewport.
    Observed { delay_ms: u32 },
    /// Entered the viewport; revealed once `due_at_ms` passes.
    Pending { due_at_ms: f64 },
    Revealed,
}

/// A reveal armed by [`RevealTracker::intersect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Armed {
    pub delay_ms: u32,
    pub due_at_ms: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    states: Vec<RevealState>,
}

impl RevealTracker {
    pub fn register(&mut self, delay_ms: u32) -> RevealId {
        self.states.push(RevealState::Observed { delay_ms });
        self.states.len() - 1
    }

    #[must_use]
    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.states.get(id).copied()
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Element `id` entered the viewport at `now_ms`. Arms its reveal the first
    /// time; later calls return `None`.
    pub fn intersect(&mut self, id: RevealId, now_ms: f64) -> Option<Armed> {
        let state = self.states.get_mut(id)?;
        let RevealState::Observed { delay_ms } = *state else {
            return None;
        };
        let due_at_ms = now_ms + f64::from(delay_ms);
        *state = RevealState::Pending { due_at_ms };
        Some(Armed { delay_ms, due_at_ms })
    }

    /// Reveal every pending element whose delay has elapsed by `now_ms`.
    pub fn reveal_due(&mut self, now_ms: f64) -> Vec<RevealId> {
        let mut revealed = Vec::new();
        for (id, state) in self.states.iter_mut().enumerate() {
            if let RevealState::Pending { due_at_ms } = *state
                && due_at_ms <= now_ms
            {
                *state = RevealState::Revealed;
                revealed.push(id);
            }
        }
        revealed
    }

    /// Reveal everything not yet revealed, ignoring delays.
    pub fn reveal_all(&mut self) -> Vec<RevealId> {
        let mut revealed = Vec::new();
        for (id, state) in self.states.iter_mut().enumerate() {
            if *state != RevealState::Revealed {
                *state = RevealState::Revealed;
                revealed.push(id);
            }
        }
        revealed
    }
}

/// Parse a `data-aos-delay` value. Anything but a whole number of
/// milliseconds means no delay.
#[must_use]
pub fn parse_delay(raw: Option<&str>) -> u32 {
    raw.map_or(0, |value| value.trim().parse().unwrap_or(0))
}

/// Vertical offset for the `index`-th decorative shape. Shapes past the end of
/// `speeds` reuse its last entry.
#[must_use]
pub fn parallax_offset(index: usize, scroll_y: f64, speeds: &[f64]) -> f64 {
    let speed = speeds.get(index).or(speeds.last()).copied().unwrap_or(0.0);
    scroll_y * speed
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &RevealConfig, caps: crate::capability::Capabilities) -> Result<(), crate::error::Error> {
    use crate::capability::RevealStrategy;
    use crate::consts::{REVEAL_DELAY_ATTR, REVEAL_SELECTOR};
    use crate::dom;

    let document = dom::document()?;
    let elements = dom::query_all(&document, REVEAL_SELECTOR)?;
    let mut tracker = RevealTracker::default();
    for el in &elements {
        tracker.register(parse_delay(el.get_attribute(REVEAL_DELAY_ATTR).as_deref()));
    }

    match caps.reveal_strategy() {
        RevealStrategy::Observe => observe(config, elements, tracker)?,
        RevealStrategy::Immediate => {
            for id in tracker.reveal_all() {
                mark_revealed(&elements[id]);
            }
            log::debug!("no IntersectionObserver; revealed {} elements", tracker.len());
        }
    }

    mount_parallax(&document, config.parallax_speeds.clone())
}

#[cfg(feature = "hydrate")]
fn observe(
    config: &RevealConfig,
    elements: Vec<web_sys::Element>,
    tracker: RevealTracker,
) -> Result<(), crate::error::Error> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    if elements.is_empty() {
        return Ok(());
    }
    let count = elements.len();
    let elements = Rc::new(elements);
    let tracker = Rc::new(RefCell::new(tracker));

    let on_entries = {
        let elements = Rc::clone(&elements);
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                let Some(id) = elements.iter().position(|el| *el == target) else {
                    continue;
                };
                let Some(armed) = tracker.borrow_mut().intersect(id, js_sys::Date::now()) else {
                    continue;
                };
                let tracker = Rc::clone(&tracker);
                let elements = Rc::clone(&elements);
                // The timer firing is the proof that the delay elapsed.
                Timeout::new(armed.delay_ms, move || {
                    for id in tracker.borrow_mut().reveal_due(armed.due_at_ms) {
                        mark_revealed(&elements[id]);
                    }
                })
                .forget();
            }
        }
    };

    let cb = Closure::wrap(Box::new(on_entries) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &init)?;
    cb.forget();

    for el in elements.iter() {
        observer.observe(el);
    }
    log::debug!("observing {count} reveal elements");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn mark_revealed(element: &web_sys::Element) {
    crate::dom::warn_on_err("reveal", element.class_list().add_1(crate::consts::REVEALED_CLASS));
}

#[cfg(feature = "hydrate")]
fn mount_parallax(document: &web_sys::Document, speeds: Vec<f64>) -> Result<(), crate::error::Error> {
    use crate::consts::PARALLAX_SELECTOR;
    use crate::dom;

    let shapes = dom::query_all(document, PARALLAX_SELECTOR)?;
    if shapes.is_empty() {
        return Ok(());
    }
    let window = dom::window()?;
    let window_for_cb = window.clone();
    dom::listen_passive(&window, "scroll", move |_event| {
        let scroll_y = dom::scroll_y(&window_for_cb);
        for (index, shape) in shapes.iter().enumerate() {
            let offset = parallax_offset(index, scroll_y, &speeds);
            dom::set_style(shape, "transform", &format!("translateY({offset}px)"));
        }
    })
}
