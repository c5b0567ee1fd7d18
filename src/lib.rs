//! Interactivity layer for a static portfolio page.
//!
//! This crate is compiled to WebAssembly and attached to a pre-rendered HTML
//! document. Each behavior is a small state machine that owns its own state
//! and the elements it drives; nothing is shared between components and
//! nothing outlives the page. The browser wiring lives behind the `hydrate`
//! feature so the state machines build and test natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`loader`] | Splash overlay hidden after load, with a hard fallback |
//! | [`nav`] | Mobile menu toggle and scroll-direction hide/show |
//! | [`typewriter`] | Typing/paused/deleting phrase animation |
//! | [`reveal`] | One-shot viewport reveals and background parallax |
//! | [`contact`] | Simulated contact form submission |
//! | [`easter_egg`] | Key sequence matcher and its visual flourish |
//! | [`anchors`] | Smooth scrolling for in-page links |
//! | [`glow`] | Cursor-following glow |
//! | [`greeting`] | Console banner |
//! | [`capability`] | Feature detection, done once at startup |
//! | [`config`] | Page configuration and validation |
//! | [`error`] | Error type returned by `mount` functions |
//! | [`consts`] | Document contract selectors and default timings |

pub mod anchors;
pub mod capability;
pub mod config;
pub mod consts;
pub mod contact;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod easter_egg;
pub mod error;
pub mod glow;
pub mod greeting;
pub mod loader;
pub mod nav;
pub mod reveal;
pub mod typewriter;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: configure logging, then mount every component once the
/// document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, rejected) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (config::Config::default(), Some(err)),
    };
    let level = config.log_level().unwrap_or(log::Level::Info);
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"portfolio: logger already initialized".into());
    }
    if let Some(err) = rejected {
        log::warn!("ignoring page config: {err}");
    }

    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("cannot start: {err}");
            return;
        }
    };

    if document.ready_state() == "loading" {
        let result = dom::listen(&document, "DOMContentLoaded", move |_event| mount_all(&config));
        if let Err(err) = result {
            log::error!("cannot wait for DOMContentLoaded: {err}");
        }
    } else {
        mount_all(&config);
    }
}

#[cfg(feature = "hydrate")]
fn mount_all(config: &config::Config) {
    let caps = match dom::window() {
        Ok(window) => capability::Capabilities::detect(&window),
        Err(_) => capability::Capabilities::default(),
    };

    report("loader", loader::mount(&config.loader));
    report("nav", nav::mount(&config.nav));
    report("typewriter", typewriter::mount(&config.typewriter));
    report("reveal", reveal::mount(&config.reveal, caps));
    report("contact", contact::mount(&config.contact));
    report("easter egg", easter_egg::mount(&config.easter_egg));
    report("anchors", anchors::mount());
    report("glow", glow::mount(&config.glow, caps));

    if config.greeting {
        greeting::print();
    }
}

#[cfg(feature = "hydrate")]
fn report(component: &str, result: Result<(), error::Error>) {
    if let Err(err) = result {
        log::error!("{component} not mounted: {err}");
    }
}
