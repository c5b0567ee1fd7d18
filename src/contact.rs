//! Contact form with simulated delivery.
//!
//! Nothing is ever sent. Submitting walks the submit button through
//! `Idle -> Sending -> Sent -> Idle` on fixed delays, clearing the form when
//! the "sent" state appears and restoring the button's original markup at
//! the end.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Deserialize;

use crate::consts::{SEND_DELAY_MS, SENDING_LABEL, SENT_HOLD_MS, SENT_LABEL, SUCCESS_BACKGROUND};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactConfig {
    pub sending_label: String,
    pub sent_label: String,
    /// CSS background shown while the "sent" label is up.
    pub success_background: String,
    /// Simulated delivery time.
    pub send_delay_ms: u32,
    /// How long "sent" stays before the button resets.
    pub sent_hold_ms: u32,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            sending_label: SENDING_LABEL.to_owned(),
            sent_label: SENT_LABEL.to_owned(),
            success_background: SUCCESS_BACKGROUND.to_owned(),
            send_delay_ms: SEND_DELAY_MS,
            sent_hold_ms: SENT_HOLD_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
}

/// What the submit button should look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    /// Inner HTML of the button.
    pub html: String,
    pub disabled: bool,
    /// Inline background override; `None` clears it.
    pub background: Option<String>,
}

/// One transition of the submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub view: ButtonView,
    /// Clear the form fields along with this step.
    pub reset_form: bool,
    /// Delay before the next [`SubmitCycle::advance`], or `None` when done.
    pub next_delay_ms: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitCycle {
    config: ContactConfig,
    phase: SubmitPhase,
    original_html: String,
}

impl SubmitCycle {
    #[must_use]
    pub fn new(config: ContactConfig) -> Self {
        Self { config, phase: SubmitPhase::Idle, original_html: String::new() }
    }

    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Start a cycle, remembering the button's current markup. Ignored while a
    /// cycle is already running.
    pub fn submit(&mut self, original_html: &str) -> Option<Step> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.original_html = original_html.to_owned();
        self.phase = SubmitPhase::Sending;
        Some(Step {
            view: ButtonView { html: span(&self.config.sending_label), disabled: true, background: None },
            reset_form: false,
            next_delay_ms: Some(self.config.send_delay_ms),
        })
    }

    /// Move to the next phase once the previous step's delay has elapsed.
    pub fn advance(&mut self) -> Option<Step> {
        match self.phase {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => {
                self.phase = SubmitPhase::Sent;
                Some(Step {
                    view: ButtonView {
                        html: span(&self.config.sent_label),
                        disabled: true,
                        background: Some(self.config.success_background.clone()),
                    },
                    reset_form: true,
                    next_delay_ms: Some(self.config.sent_hold_ms),
                })
            }
            SubmitPhase::Sent => {
                self.phase = SubmitPhase::Idle;
                Some(Step {
                    view: ButtonView { html: std::mem::take(&mut self.original_html), disabled: false, background: None },
                    reset_form: false,
                    next_delay_ms: None,
                })
            }
        }
    }
}

fn span(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 13);
    out.push_str("<span>");
    for c in label.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out.push_str("</span>");
    out
}

#[cfg(feature = "hydrate")]
pub fn mount(config: &ContactConfig) -> Result<(), crate::error::Error> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{HtmlButtonElement, HtmlFormElement};

    use crate::consts::{CONTACT_FORM_ID, SUBMIT_SELECTOR};
    use crate::dom;
    use crate::error::Error;

    let Some(form) = dom::document()?.get_element_by_id(CONTACT_FORM_ID) else {
        log::debug!("no #{CONTACT_FORM_ID}; contact form skipped");
        return Ok(());
    };
    let form = form.dyn_into::<HtmlFormElement>().map_err(|_| Error::MissingElement(CONTACT_FORM_ID))?;
    let button = match form.query_selector(SUBMIT_SELECTOR)?.map(|el| el.dyn_into::<HtmlButtonElement>()) {
        Some(Ok(button)) => button,
        _ => return Err(Error::MissingElement(SUBMIT_SELECTOR)),
    };

    let cycle = Rc::new(RefCell::new(SubmitCycle::new(config.clone())));
    let form_for_cb = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let Some(step) = cycle.borrow_mut().submit(&button.inner_html()) else {
            return;
        };
        render(&button, &form_for_cb, &step);
        log::debug!("contact form submitted (simulated)");
        wasm_bindgen_futures::spawn_local(drive(
            Rc::clone(&cycle),
            button.clone(),
            form_for_cb.clone(),
            step.next_delay_ms,
        ));
    })
}

#[cfg(feature = "hydrate")]
async fn drive(
    cycle: std::rc::Rc<std::cell::RefCell<SubmitCycle>>,
    button: web_sys::HtmlButtonElement,
    form: web_sys::HtmlFormElement,
    mut next_delay_ms: Option<u32>,
) {
    while let Some(delay_ms) = next_delay_ms {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        let Some(step) = cycle.borrow_mut().advance() else {
            break;
        };
        render(&button, &form, &step);
        next_delay_ms = step.next_delay_ms;
    }
}

#[cfg(feature = "hydrate")]
fn render(button: &web_sys::HtmlButtonElement, form: &web_sys::HtmlFormElement, step: &Step) {
    let view = &step.view;
    button.set_inner_html(&view.html);
    button.set_disabled(view.disabled);
    let background = view.background.as_deref().unwrap_or("");
    crate::dom::warn_on_err("submit background", button.style().set_property("background", background));
    if step.reset_form {
        form.reset();
    }
}
