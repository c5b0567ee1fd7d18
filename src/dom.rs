//! Thin `web-sys` helpers shared by the component `mount` functions.
//!
//! Every listener registered here lives for the rest of the page, so the
//! closures are leaked with `Closure::forget` once attached.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::Error;

pub fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::NoDocument)
}

pub fn document() -> Result<Document, Error> {
    window()?.document().ok_or(Error::NoDocument)
}

pub fn body() -> Result<HtmlElement, Error> {
    document()?.body().ok_or(Error::MissingElement("body"))
}

/// Random source for cosmetic jitter, seeded from the page clock.
pub fn page_rng() -> SmallRng {
    SmallRng::seed_from_u64(js_sys::Date::now().to_bits() ^ js_sys::Math::random().to_bits())
}

/// Current vertical scroll offset, or 0 when the window refuses to say.
pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, Error> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::new();
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(element) = node.dyn_into::<Element>()
        {
            out.push(element);
        }
    }
    Ok(out)
}

/// Attach a page-lifetime listener.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), Error> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Attach a page-lifetime listener that promises never to call `preventDefault`.
pub fn listen_passive(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), Error> {
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(event, cb.as_ref().unchecked_ref(), &options)?;
    cb.forget();
    Ok(())
}

/// Log a failed cosmetic DOM call instead of dropping it.
pub fn warn_on_err<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(err) = result {
        log::warn!("{context}: {}", Error::from(err));
    }
}

/// Set (or clear, with `""`) one inline style property on `<body>`.
pub fn set_body_style(property: &str, value: &str) {
    match body() {
        Ok(body) => warn_on_err(property, body.style().set_property(property, value)),
        Err(err) => log::warn!("{property}: {err}"),
    }
}

/// Set one inline style property on any element that carries a style.
pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        warn_on_err(property, el.style().set_property(property, value));
    }
}
