//! Browser capabilities, probed once at startup and handed to the components
//! whose behavior depends on them.

#[cfg(test)]
#[path = "capability_test.rs"]
mod capability_test;

/// How scroll reveals are triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStrategy {
    /// Watch each element with an `IntersectionObserver`.
    Observe,
    /// No observer support: show everything right away.
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// `IntersectionObserver` exists on `window`.
    pub intersection_observer: bool,
    /// `(pointer: fine)` matches, i.e. a mouse or trackpad is present.
    pub fine_pointer: bool,
}

impl Capabilities {
    #[must_use]
    pub fn reveal_strategy(self) -> RevealStrategy {
        if self.intersection_observer { RevealStrategy::Observe } else { RevealStrategy::Immediate }
    }

    /// The cursor glow only makes sense with a precise pointer.
    #[must_use]
    pub fn cursor_glow(self) -> bool {
        self.fine_pointer
    }

    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn detect(window: &web_sys::Window) -> Self {
        let intersection_observer = js_sys::Reflect::has(window, &"IntersectionObserver".into()).unwrap_or(false);
        let fine_pointer = matches!(window.match_media("(pointer: fine)"), Ok(Some(query)) if query.matches());
        let caps = Self { intersection_observer, fine_pointer };
        log::debug!("capabilities: {caps:?}");
        caps
    }
}
