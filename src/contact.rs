//! Contact form with a simulated submission.
//!
//! There is no backend. Submitting collects the fields, shows a sending
//! state, and after a delay resolves to success or failure from a random
//! roll supplied by the host. The form is split into
//! [`ContactForm::begin_submit`] and [`ContactForm::finish`] so the waiting
//! happens outside, in the host's timer.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::Serialize;

use crate::dom::Dom;

pub const FORM_SELECTOR: &str = "#contact-form";
pub const STATUS_SELECTOR: &str = "#form-status";
pub const SUBMIT_SELECTOR: &str = ".submit-btn";

const SENDING_LABEL: &str = r#"<i class="fas fa-spinner fa-spin"></i> Sending..."#;
const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

const FIELDS: [&str; 4] = ["name", "email", "subject", "message"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
}

impl SubmitOutcome {
    fn status_class(self) -> &'static str {
        match self {
            Self::Sent => "success",
            Self::Failed => "error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Sent => "check-circle",
            Self::Failed => "exclamation-circle",
        }
    }

    fn message(self) -> &'static str {
        match self {
            Self::Sent => SUCCESS_MESSAGE,
            Self::Failed => FAILURE_MESSAGE,
        }
    }
}

/// Decide a simulated outcome: a roll in `[0, 1)` above `failure_rate` succeeds.
#[must_use]
pub fn simulate_outcome(roll: f64, failure_rate: f64) -> SubmitOutcome {
    if roll > failure_rate { SubmitOutcome::Sent } else { SubmitOutcome::Failed }
}

/// Selector for the form field named `name`.
fn field_selector(name: &str) -> String {
    format!("[name=\"{name}\"]")
}

pub struct ContactForm<D: Dom> {
    dom: D,
    form: D::Node,
    status: Option<D::Node>,
    button: Option<D::Node>,
    saved_label: Option<String>,
    pending: bool,
}

impl<D: Dom> ContactForm<D> {
    /// `None` when the page has no contact form.
    pub fn attach(dom: D) -> Option<Self> {
        let form = dom.query(FORM_SELECTOR)?;
        let status = dom.query(STATUS_SELECTOR);
        let button = dom.query_within(&form, SUBMIT_SELECTOR);
        Some(Self { dom, form, status, button, saved_label: None, pending: false })
    }

    #[must_use]
    pub fn form(&self) -> &D::Node {
        &self.form
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Enter the sending state and collect the fields.
    ///
    /// Returns `None` while a previous submission is still pending.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.pending {
            return None;
        }
        self.pending = true;

        if let Some(button) = &self.button {
            self.saved_label = Some(self.dom.html(button));
            self.dom.set_html(button, SENDING_LABEL);
            self.dom.set_attribute(button, "disabled", "");
        }

        let [name, email, subject, message] = FIELDS.map(|field| {
            self.dom
                .query_within(&self.form, &field_selector(field))
                .map(|node| self.dom.value(&node))
                .unwrap_or_default()
        });
        Some(ContactMessage { name, email, subject, message })
    }

    /// Show the outcome and restore the submit button.
    pub fn finish(&mut self, outcome: SubmitOutcome) {
        self.show_status(outcome);
        if outcome == SubmitOutcome::Sent {
            self.dom.reset_form(&self.form);
        }
        if let Some(button) = &self.button {
            if let Some(label) = self.saved_label.take() {
                self.dom.set_html(button, &label);
            }
            self.dom.remove_attribute(button, "disabled");
        }
        self.pending = false;
        log::info!("contact: submission finished: {outcome:?}");
    }

    pub fn hide_status(&self) {
        if let Some(status) = &self.status {
            self.dom.set_style(status, "display", "none");
        }
    }

    fn show_status(&self, outcome: SubmitOutcome) {
        let Some(status) = &self.status else {
            return;
        };
        self.dom.set_attribute(status, "class", &format!("form-status {}", outcome.status_class()));
        self.dom.set_html(status, &format!(r#"<i class="fas fa-{}"></i> {}"#, outcome.icon(), outcome.message()));
        self.dom.set_style(status, "display", "flex");
    }
}
