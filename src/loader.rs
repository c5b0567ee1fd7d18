//! Loading splash: hide `#loader` shortly after the page loads, or after a
//! hard fallback timeout if the load signal never arrives.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use serde::Deserialize;

use crate::consts::{LOADER_FALLBACK_MS, LOADER_GRACE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Delay between the load signal and hiding the overlay.
    pub grace_ms: u32,
    /// Unconditional hide, measured from mount.
    pub fallback_ms: u32,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { grace_ms: LOADER_GRACE_MS, fallback_ms: LOADER_FALLBACK_MS }
    }
}

impl LoaderConfig {
    /// Milliseconds after mount at which the overlay ends up hidden, given
    /// when (if ever) the load signal fired.
    #[must_use]
    pub fn hide_deadline(&self, loaded_at_ms: Option<u32>) -> u32 {
        match loaded_at_ms {
            Some(at) => at.saturating_add(self.grace_ms).min(self.fallback_ms),
            None => self.fallback_ms,
        }
    }

    /// Timer to start when the load signal fires `loaded_at_ms` after mount.
    /// Zero once the fallback deadline has already passed.
    #[must_use]
    pub fn grace_after_load(&self, loaded_at_ms: u32) -> u32 {
        self.hide_deadline(Some(loaded_at_ms)).saturating_sub(loaded_at_ms)
    }
}

/// Overlay visibility. Both timers race to hide it; only the first wins.
#[derive(Debug, Default)]
pub struct Loader {
    hidden: bool,
}

impl Loader {
    /// Mark the overlay hidden. Returns `true` only on the transition.
    pub fn hide(&mut self) -> bool {
        !std::mem::replace(&mut self.hidden, true)
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &LoaderConfig) -> Result<(), crate::error::Error> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    use crate::consts::{HIDDEN_CLASS, LOADER_ID};
    use crate::dom;

    let window = dom::window()?;
    let document = dom::document()?;
    let Some(overlay) = document.get_element_by_id(LOADER_ID) else {
        log::debug!("no #{LOADER_ID}; loader skipped");
        return Ok(());
    };

    let state = Rc::new(RefCell::new(Loader::default()));
    let hide: Rc<dyn Fn()> = Rc::new(move || {
        if state.borrow_mut().hide() {
            dom::warn_on_err("hide loader", overlay.class_list().add_1(HIDDEN_CLASS));
            dom::set_body_style("overflow", "");
            log::debug!("loader hidden");
        }
    });

    let config = *config;
    let mounted_at_ms = js_sys::Date::now();
    let start_grace = move |loaded_at_ms: u32, hide: Rc<dyn Fn()>| {
        Timeout::new(config.grace_after_load(loaded_at_ms), move || hide()).forget();
    };
    if document.ready_state() == "complete" {
        start_grace(0, Rc::clone(&hide));
    } else {
        let hide = Rc::clone(&hide);
        dom::listen(&window, "load", move |_event| {
            start_grace(elapsed_ms(mounted_at_ms), Rc::clone(&hide));
        })?;
    }

    Timeout::new(config.hide_deadline(None), move || hide()).forget();
    Ok(())
}

/// Whole milliseconds since `start_ms`. A clock step backwards reads as zero.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn elapsed_ms(start_ms: f64) -> u32 {
    (js_sys::Date::now() - start_ms).max(0.0) as u32
}
