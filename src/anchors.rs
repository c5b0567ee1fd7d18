//! Smooth scrolling for in-page `#fragment` links, offset so the target is not
//! tucked under the fixed nav bar.

#[cfg(test)]
#[path = "anchors_test.rs"]
mod anchors_test;

/// Element id an in-page `href` points at. `None` for the bare `#` and for
/// anything that is not a fragment link.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document offset to scroll to so the target sits just below the nav bar.
///
/// `target_top` is the target's viewport-relative top edge.
#[must_use]
pub fn scroll_destination(target_top: f64, scroll_y: f64, nav_height: f64) -> f64 {
    target_top + scroll_y - nav_height
}

#[cfg(feature = "hydrate")]
pub fn mount() -> Result<(), crate::error::Error> {
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

    use crate::consts::{ANCHOR_SELECTOR, NAV_ID};
    use crate::dom;

    let window = dom::window()?;
    let document = dom::document()?;
    let anchors = dom::query_all(&document, ANCHOR_SELECTOR)?;
    let count = anchors.len();

    for anchor in anchors {
        let anchor_for_cb = anchor.clone();
        let window = window.clone();
        let document = document.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = anchor_for_cb.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                return;
            };
            event.prevent_default();

            let nav_height = document
                .get_element_by_id(NAV_ID)
                .and_then(|nav| nav.dyn_ref::<HtmlElement>().map(HtmlElement::offset_height))
                .map_or(0.0, f64::from);
            let top = scroll_destination(target.get_bounding_client_rect().top(), dom::scroll_y(&window), nav_height);

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?;
    }

    log::debug!("smooth scroll attached to {count} anchors");
    Ok(())
}
