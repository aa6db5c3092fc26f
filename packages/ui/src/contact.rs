use std::time::Duration;

use api::{ContactMessage, SendReceipt, ValidationError};
use dioxus::prelude::*;

use crate::content::{self, SocialKind, SOCIAL_LINKS};
use crate::i18n::{t, Lang};

const CONTACT_CSS: Asset = asset!("/assets/styling/contact.css");

/// How long a delivery banner stays visible.
pub const STATUS_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub success: bool,
    pub message: String,
    epoch: u64,
}

/// Draft, banner and in-flight flag of the contact form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactState {
    pub form: ContactMessage,
    status: Option<FormStatus>,
    submitting: bool,
    next_epoch: u64,
}

fn validation_text(lang: Lang, err: &ValidationError) -> String {
    match err {
        ValidationError::MissingRequired => t(lang, "contact.status.required"),
        ValidationError::InvalidEmail => t(lang, "contact.status.invalid_email"),
    }
}

impl ContactState {
    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.form.name,
            Field::Email => &mut self.form.email,
            Field::Subject => &mut self.form.subject,
            Field::Message => &mut self.form.message,
        };
        *slot = value;
    }

    fn set_status(&mut self, success: bool, message: String) -> u64 {
        self.next_epoch += 1;
        let epoch = self.next_epoch;
        self.status = Some(FormStatus {
            success,
            message,
            epoch,
        });
        epoch
    }

    /// Start a submission. Returns the message to send, or `None` when a
    /// submission is already in flight or the draft does not validate. In the
    /// latter case the banner explains why and stays until the next attempt.
    pub fn begin(&mut self, lang: Lang) -> Option<ContactMessage> {
        if self.submitting {
            return None;
        }
        self.status = None;
        if let Err(err) = self.form.validate() {
            self.set_status(false, validation_text(lang, &err));
            return None;
        }
        self.submitting = true;
        Some(self.form.clone())
    }

    /// Record the outcome of the send. Returns the epoch that `expire_status`
    /// must be called with once `STATUS_TTL` has elapsed.
    pub fn finish(&mut self, lang: Lang, outcome: Result<SendReceipt, String>) -> u64 {
        self.submitting = false;
        match outcome {
            Ok(receipt) if receipt.is_accepted() => {
                self.form = ContactMessage::default();
                self.set_status(true, t(lang, "contact.status.sent"))
            }
            _ => self.set_status(false, t(lang, "contact.status.failed")),
        }
    }

    /// Clear the banner if it is still the one stamped with `epoch`.
    pub fn expire_status(&mut self, epoch: u64) {
        if self.status.as_ref().is_some_and(|s| s.epoch == epoch) {
            self.status = None;
        }
    }
}

#[component]
pub fn ContactSection() -> Element {
    let lang = crate::use_lang()();
    let mut state = use_signal(ContactState::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(message) = state.with_mut(|s| s.begin(lang)) else {
            return;
        };
        spawn(async move {
            let outcome = api::send_contact_message(message)
                .await
                .map_err(|e| e.to_string());
            if let Err(err) = &outcome {
                tracing::warn!("contact: send failed: {err}");
            }
            let epoch = state.with_mut(|s| s.finish(lang, outcome));
            crate::view_state::sleep(STATUS_TTL).await;
            state.with_mut(|s| s.expire_status(epoch));
        });
    };

    let snapshot = state();
    let submitting = snapshot.is_submitting();
    let form = snapshot.form.clone();
    let status = snapshot.status().cloned();

    let name_ph = t(lang, "contact.form.name_ph");
    let email_ph = t(lang, "contact.form.email_ph");
    let subject_ph = t(lang, "contact.form.subject_ph");
    let message_ph = t(lang, "contact.form.message_ph");

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_CSS }
        section { id: "contact", class: "section contact",
            h2 { class: "section_title", {t(lang, "contact.title")} }
            p { class: "section_subtitle", {t(lang, "contact.subtitle")} }

            div { class: "contact_grid",
                div { class: "contact_info",
                    h3 { {t(lang, "contact.info")} }
                    div { class: "info_row",
                        span { class: "info_label", {t(lang, "contact.form.email")} }
                        a { href: "mailto:{content::CONTACT_EMAIL}", "{content::CONTACT_EMAIL}" }
                    }
                    div { class: "info_row",
                        span { class: "info_label", {t(lang, "contact.phone")} }
                        span { class: "info_value", {content::redacted_phone()} }
                    }
                    h3 { {t(lang, "contact.social")} }
                    div { class: "social_row",
                        for link in SOCIAL_LINKS.iter().filter(|l| l.kind != SocialKind::Email) {
                            a {
                                key: "{link.label}",
                                class: "social_link",
                                href: link.href,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }

                form { class: "contact_form", novalidate: true, onsubmit: on_submit,
                    h3 { {t(lang, "contact.form.title")} }
                    label { r#for: "contact-name", {t(lang, "contact.form.name")} " *" }
                    input {
                        id: "contact-name",
                        name: "name",
                        value: "{form.name}",
                        placeholder: "{name_ph}",
                        oninput: move |e| state.with_mut(|s| s.set_field(Field::Name, e.value())),
                    }
                    label { r#for: "contact-email", {t(lang, "contact.form.email")} " *" }
                    input {
                        id: "contact-email",
                        name: "email",
                        r#type: "email",
                        value: "{form.email}",
                        placeholder: "{email_ph}",
                        oninput: move |e| state.with_mut(|s| s.set_field(Field::Email, e.value())),
                    }
                    label { r#for: "contact-subject", {t(lang, "contact.form.subject")} }
                    input {
                        id: "contact-subject",
                        name: "subject",
                        value: "{form.subject}",
                        placeholder: "{subject_ph}",
                        oninput: move |e| state.with_mut(|s| s.set_field(Field::Subject, e.value())),
                    }
                    label { r#for: "contact-message", {t(lang, "contact.form.message")} " *" }
                    textarea {
                        id: "contact-message",
                        name: "message",
                        rows: 6,
                        value: "{form.message}",
                        placeholder: "{message_ph}",
                        oninput: move |e| state.with_mut(|s| s.set_field(Field::Message, e.value())),
                    }

                    if let Some(status) = status {
                        p {
                            class: if status.success { "form_status success" } else { "form_status error" },
                            role: "status",
                            "{status.message}"
                        }
                    }

                    button {
                        class: "btn primary",
                        r#type: "submit",
                        disabled: submitting,
                        if submitting {
                            {t(lang, "contact.form.sending")}
                        } else {
                            {t(lang, "contact.form.send")}
                        }
                    }
                }
            }
        }
    }
}
