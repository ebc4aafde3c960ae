//! Contact form submission and feedback message.
//!
//! The hide timer of an earlier message is not cancelled by a newer one, so a
//! quick resubmission can have its message cleared early. The form is low
//! stakes and the page script has always behaved this way.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlFormElement};

use crate::config::PortfolioConfig;
use crate::net::contact::{send_form, settle};
use crate::state::contact::{Feedback, MessageKind};
use crate::util::dom;

const FORM_SELECTOR: &str = ".contact-form";
const MESSAGE_ID: &str = "formMessage";

#[derive(Clone)]
pub struct ContactManager {
    inner: Rc<Inner>,
}

struct Inner {
    form: Option<HtmlFormElement>,
    message: Option<Element>,
    message_duration_ms: u32,
}

impl ContactManager {
    pub fn mount(config: &PortfolioConfig) -> Self {
        let form = dom::query(FORM_SELECTOR).and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
        let manager = Self {
            inner: Rc::new(Inner {
                form,
                message: dom::by_id(MESSAGE_ID),
                message_duration_ms: config.message_duration,
            }),
        };
        if let Some(form) = &manager.inner.form {
            let this = manager.clone();
            dom::listen(form, "submit", move |event: Event| {
                event.prevent_default();
                let this = this.clone();
                wasm_bindgen_futures::spawn_local(async move { this.handle_submit().await });
            });
        }
        log::debug!("contact manager mounted: form {}", if manager.inner.form.is_some() { "found" } else { "absent" });
        manager
    }

    async fn handle_submit(&self) {
        let Some(form) = &self.inner.form else {
            return;
        };
        let result = settle(send_form(form)).await;
        match &result {
            Err(err) if err.is_transport() => log::error!("contact form submission failed: {err}"),
            Err(err) => log::warn!("{err}"),
            Ok(()) => log::info!("contact form submitted"),
        }

        let feedback = Feedback::from_result(&result);
        if feedback.reset_form {
            form.reset();
        }
        self.display_message(&feedback.text, feedback.kind);
    }

    /// Show `text` in `#formMessage` and hide it after the configured delay.
    pub fn display_message(&self, text: &str, kind: MessageKind) {
        let Some(message) = self.inner.message.clone() else {
            return;
        };
        message.set_text_content(Some(text));
        for class in kind.classes() {
            dom::add_class(&message, class);
        }
        dom::set_styles(&message, &[("display", "block")]);

        Timeout::new(self.inner.message_duration_ms, move || {
            dom::set_styles(&message, &[("display", "none")]);
            message.set_text_content(Some(""));
            for class in kind.classes() {
                dom::remove_class(&message, class);
            }
        })
        .forget();
    }
}
