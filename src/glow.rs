//! Soft radial glow that trails the mouse cursor on precise-pointer devices.
//!
//! Every animation frame the glow covers a fixed fraction of the remaining
//! distance to the cursor (exponential smoothing), so it eases in and never
//! overshoots.

#[cfg(test)]
#[path = "glow_test.rs"]
mod glow_test;

use serde::Deserialize;

use crate::consts::{GLOW_SIZE_PX, GLOW_SMOOTHING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlowConfig {
    /// Fraction of the remaining distance covered per frame, in (0, 1].
    pub smoothing: f64,
    pub size_px: u32,
    /// Inner color of the radial gradient.
    pub color: String,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self { smoothing: GLOW_SMOOTHING, size_px: GLOW_SIZE_PX, color: "rgba(34, 211, 238, 0.08)".to_owned() }
    }
}

impl GlowConfig {
    /// Inline style for the glow element.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "position: fixed; width: {size}px; height: {size}px; \
             background: radial-gradient(circle, {color} 0%, transparent 70%); \
             pointer-events: none; z-index: 0; transform: translate(-50%, -50%); \
             transition: opacity 0.3s ease;",
            size = self.size_px,
            color = self.color,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Glow {
    current: Point,
    target: Point,
    smoothing: f64,
}

impl Glow {
    /// A glow resting at the origin.
    #[must_use]
    pub fn new(smoothing: f64) -> Self {
        Self { current: Point::new(0.0, 0.0), target: Point::new(0.0, 0.0), smoothing }
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Latest cursor position.
    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advance one frame and return the position to render.
    pub fn step(&mut self) -> Point {
        self.current.x += (self.target.x - self.current.x) * self.smoothing;
        self.current.y += (self.target.y - self.current.y) * self.smoothing;
        self.current
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &GlowConfig, caps: crate::capability::Capabilities) -> Result<(), crate::error::Error> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{HtmlElement, MouseEvent};

    use crate::dom;

    if !caps.cursor_glow() {
        log::debug!("coarse pointer; cursor glow skipped");
        return Ok(());
    }

    let window = dom::window()?;
    let document = dom::document()?;
    let el = document.create_element("div")?.dyn_into::<HtmlElement>().map_err(JsValue::from)?;
    el.style().set_css_text(&config.css());
    dom::body()?.append_child(&el)?;

    let glow = Rc::new(RefCell::new(Glow::new(config.smoothing)));
    {
        let glow = Rc::clone(&glow);
        dom::listen(&document, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                glow.borrow_mut().set_target(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
            }
        })?;
    }

    // The frame callback re-queues itself through this slot for the rest of the page.
    let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let frame_for_cb = Rc::clone(&frame);
    let window_for_cb = window.clone();
    *frame.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        let at = glow.borrow_mut().step();
        let style = el.style();
        dom::warn_on_err("glow left", style.set_property("left", &format!("{}px", at.x)));
        dom::warn_on_err("glow top", style.set_property("top", &format!("{}px", at.y)));
        if let Some(cb) = frame_for_cb.borrow().as_ref() {
            dom::warn_on_err("glow frame", window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = frame.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    log::debug!("cursor glow started");
    Ok(())
}
