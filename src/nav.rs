//! Navigation bar: mobile menu toggle and scroll-direction hide/show.
//!
//! DESIGN
//! ======
//! The menu flag and the bar visibility are independent halves of one small
//! state machine. Visibility is recomputed from scratch on every scroll event
//! by [`nav_visibility`], so the only remembered input is the last offset.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use serde::Deserialize;

use crate::consts::{NAV_DESKTOP_MIN_WIDTH_PX, NAV_HIDE_OFFSET_PX, NAV_REVEAL_OFFSET_PX};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// Up to this offset the bar is always visible.
    pub reveal_offset_px: f64,
    /// Scrolling down past this offset hides the bar.
    pub hide_offset_px: f64,
    /// Resizing wider than this closes the mobile menu.
    pub desktop_min_width_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            reveal_offset_px: NAV_REVEAL_OFFSET_PX,
            hide_offset_px: NAV_HIDE_OFFSET_PX,
            desktop_min_width_px: NAV_DESKTOP_MIN_WIDTH_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavVisibility {
    #[default]
    Visible,
    Hidden,
}

/// Bar visibility after scrolling from `previous` to `current`.
#[must_use]
pub fn nav_visibility(previous: f64, current: f64, config: &NavConfig) -> NavVisibility {
    if current > config.reveal_offset_px && current > previous && current > config.hide_offset_px {
        NavVisibility::Hidden
    } else {
        NavVisibility::Visible
    }
}

#[derive(Debug, Clone)]
pub struct Navigation {
    config: NavConfig,
    menu_open: bool,
    visibility: NavVisibility,
    last_scroll_y: f64,
}

impl Navigation {
    #[must_use]
    pub fn new(config: NavConfig, initial_scroll_y: f64) -> Self {
        Self { config, menu_open: false, visibility: NavVisibility::Visible, last_scroll_y: initial_scroll_y }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn visibility(&self) -> NavVisibility {
        self.visibility
    }

    #[must_use]
    pub fn last_scroll_y(&self) -> f64 {
        self.last_scroll_y
    }

    /// Flip the menu. Returns the new open state.
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// A menu link was followed. Returns `true` if that closed the menu.
    pub fn link_selected(&mut self) -> bool {
        self.close_menu()
    }

    /// The viewport was resized. Returns `true` if that closed the menu.
    pub fn resized(&mut self, width: f64) -> bool {
        width > self.config.desktop_min_width_px && self.close_menu()
    }

    /// Record a scroll event and return the bar's new visibility.
    pub fn scrolled(&mut self, scroll_y: f64) -> NavVisibility {
        self.visibility = nav_visibility(self.last_scroll_y, scroll_y, &self.config);
        self.last_scroll_y = scroll_y;
        self.visibility
    }

    fn close_menu(&mut self) -> bool {
        if self.menu_open {
            self.toggle_menu();
            true
        } else {
            false
        }
    }
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &NavConfig) -> Result<(), crate::error::Error> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::consts::{ACTIVE_CLASS, NAV_ID, NAV_LINK_SELECTOR, NAV_MENU_ID, NAV_TOGGLE_ID};
    use crate::dom;
    use crate::error::Error;

    let window = dom::window()?;
    let document = dom::document()?;
    let Some(bar) = document.get_element_by_id(NAV_ID) else {
        log::debug!("no #{NAV_ID}; navigation skipped");
        return Ok(());
    };
    let toggle = document.get_element_by_id(NAV_TOGGLE_ID).ok_or(Error::MissingElement(NAV_TOGGLE_ID))?;
    let menu = document.get_element_by_id(NAV_MENU_ID).ok_or(Error::MissingElement(NAV_MENU_ID))?;

    let state = Rc::new(RefCell::new(Navigation::new(*config, dom::scroll_y(&window))));

    // Renders the menu half of the state after any change.
    let render_menu: Rc<dyn Fn(bool)> = {
        let toggle = toggle.clone();
        Rc::new(move |open: bool| {
            for el in [&toggle, &menu] {
                dom::warn_on_err("toggle menu", el.class_list().toggle_with_force(ACTIVE_CLASS, open));
            }
            dom::set_body_style("overflow", if open { "hidden" } else { "" });
        })
    };

    {
        let state = Rc::clone(&state);
        let render_menu = Rc::clone(&render_menu);
        dom::listen(&toggle, "click", move |_event| {
            let open = state.borrow_mut().toggle_menu();
            render_menu(open);
        })?;
    }

    for link in dom::query_all(&document, NAV_LINK_SELECTOR)? {
        let state = Rc::clone(&state);
        let render_menu = Rc::clone(&render_menu);
        dom::listen(&link, "click", move |_event| {
            if state.borrow_mut().link_selected() {
                render_menu(false);
            }
        })?;
    }

    {
        let state = Rc::clone(&state);
        let window_for_cb = window.clone();
        dom::listen_passive(&window, "scroll", move |_event| {
            let visibility = state.borrow_mut().scrolled(dom::scroll_y(&window_for_cb));
            render_bar(&bar, visibility);
        })?;
    }

    {
        let window_for_cb = window.clone();
        dom::listen(&window, "resize", move |_event| {
            let width = window_for_cb.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0));
            if state.borrow_mut().resized(width) {
                render_menu(false);
            }
        })?;
    }

    log::debug!("navigation mounted");
    Ok(())
}

#[cfg(feature = "hydrate")]
fn render_bar(bar: &web_sys::Element, visibility: NavVisibility) {
    let hidden = visibility == NavVisibility::Hidden;
    crate::dom::warn_on_err(
        "nav visibility",
        bar.class_list().toggle_with_force(crate::consts::HIDDEN_CLASS, hidden),
    );
}
