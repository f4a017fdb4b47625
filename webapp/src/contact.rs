use std::future::Future;

use dioxus::prelude::*;

use gloo_timers::future::TimeoutFuture;

use crate::reveal::{REVEAL_THRESHOLD, reveal_class, use_reveal};

/// Stand-in for a real mail backend round-trip.
const SUBMIT_DELAY_MS: u32 = 2000;

const SUCCESS_MESSAGE: &str = "Message sent successfully!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Overwrite exactly one field, leaving the other three untouched.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Subject => self.subject = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = ContactForm::default();
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Everything the form view renders from: field values, the in-flight
/// marker, and the status line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub form: ContactForm,
    pub phase: SubmitPhase,
    pub status: String,
}

impl SubmissionState {
    /// Start a submission. Returns false when one is already in flight;
    /// the repeat event is ignored outright.
    pub fn begin(&mut self) -> bool {
        if self.phase == SubmitPhase::Submitting {
            return false;
        }

        self.phase = SubmitPhase::Submitting;
        self.status.clear();
        true
    }

    /// Clear the form, return to idle, and surface the success message in
    /// one step.
    pub fn complete(&mut self) {
        self.form.clear();
        self.phase = SubmitPhase::Idle;
        self.status = String::from(SUCCESS_MESSAGE);
    }
}

/// Handle through which the submission driver reaches the state it
/// mutates; the component hands in its signal, tests a plain cell.
pub trait SubmissionStore {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut SubmissionState) -> R) -> R;
}

impl SubmissionStore for Signal<SubmissionState> {
    fn with_mut<R>(&mut self, f: impl FnOnce(&mut SubmissionState) -> R) -> R {
        f(&mut self.write())
    }
}

/// Drive one submission against the injected backend: flip to submitting,
/// await the backend, then clear the form and report success. Returns
/// false (without touching the backend) when a submission was already in
/// flight. Success is unconditional; there is no failure path to report.
pub async fn run_submission<S, B>(mut store: S, backend: B) -> bool
where
    S: SubmissionStore,
    B: Future<Output = ()>,
{
    if !store.with_mut(SubmissionState::begin) {
        return false;
    }

    backend.await;

    store.with_mut(SubmissionState::complete);
    true
}

#[component]
pub fn Contact() -> Element {
    let revealed = use_reveal("contact", REVEAL_THRESHOLD);

    let mut state = use_signal(SubmissionState::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        // the task belongs to this component's scope, so a completion after
        // navigating away is dropped instead of writing to a dead view
        spawn(async move {
            run_submission(state, TimeoutFuture::new(SUBMIT_DELAY_MS)).await;
        });
    };

    let current = state();
    let submitting = current.phase == SubmitPhase::Submitting;

    rsx! {
        section { id: "contact", class: "contact-section",
            div { class: "container",
                div { class: reveal_class("section-header section-block", revealed()),
                    h2 { class: "section-title", "Get In " span { "Touch" } }
                    p { class: "section-subtitle",
                        "Let's discuss your next project or just say hello"
                    }
                }

                div { class: "contact-content",
                    div { class: reveal_class("contact-info section-block", revealed()),
                        h3 { "Let's Connect" }
                        p {
                            "I'm always interested in new opportunities and exciting projects. \
                             Whether you have a question or just want to say hi, feel free to \
                             reach out!"
                        }

                        div { class: "contact-item",
                            span { class: "contact-icon", "✉" }
                            div { class: "contact-details",
                                h4 { "Email" }
                                a { href: "mailto:your.email@example.com", "your.email@example.com" }
                            }
                        }
                        div { class: "contact-item",
                            span { class: "contact-icon", "☎" }
                            div { class: "contact-details",
                                h4 { "Phone" }
                                a { href: "tel:+15551234567", "+1 (555) 123-4567" }
                            }
                        }
                        div { class: "contact-item",
                            span { class: "contact-icon", "⌖" }
                            div { class: "contact-details",
                                h4 { "Location" }
                                span { "San Francisco, CA" }
                            }
                        }

                        div { class: "social-links",
                            a {
                                class: "social-link",
                                href: "https://github.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "GitHub"
                            }
                            a {
                                class: "social-link",
                                href: "https://linkedin.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "LinkedIn"
                            }
                            a {
                                class: "social-link",
                                href: "https://twitter.com",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "Twitter"
                            }
                        }
                    }

                    form {
                        class: reveal_class("contact-form section-block", revealed()),
                        onsubmit: submit,

                        div { class: "form-group",
                            label { r#for: "name", "Name" }
                            input {
                                r#type: "text",
                                id: "name",
                                name: "name",
                                placeholder: "Your name",
                                required: true,
                                value: "{current.form.name}",
                                oninput: move |evt| {
                                    state.write().form.set(FormField::Name, evt.value())
                                },
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "email", "Email" }
                            input {
                                r#type: "email",
                                id: "email",
                                name: "email",
                                placeholder: "your.email@example.com",
                                required: true,
                                value: "{current.form.email}",
                                oninput: move |evt| {
                                    state.write().form.set(FormField::Email, evt.value())
                                },
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "subject", "Subject" }
                            input {
                                r#type: "text",
                                id: "subject",
                                name: "subject",
                                placeholder: "What's this about?",
                                required: true,
                                value: "{current.form.subject}",
                                oninput: move |evt| {
                                    state.write().form.set(FormField::Subject, evt.value())
                                },
                            }
                        }
                        div { class: "form-group",
                            label { r#for: "message", "Message" }
                            textarea {
                                id: "message",
                                name: "message",
                                placeholder: "Tell me about your project...",
                                required: true,
                                value: "{current.form.message}",
                                oninput: move |evt| {
                                    state.write().form.set(FormField::Message, evt.value())
                                },
                            }
                        }

                        button {
                            class: "btn btn-primary submit-button",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting { "Sending..." } else { "Send Message" }
                        }

                        if !current.status.is_empty() {
                            span { class: "status-message", "{current.status}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::pin::{Pin, pin};
    use std::rc::Rc;
    use std::task::{Context, Poll, Waker};

    struct SharedState(Rc<RefCell<SubmissionState>>);

    impl SubmissionStore for SharedState {
        fn with_mut<R>(&mut self, f: impl FnOnce(&mut SubmissionState) -> R) -> R {
            f(&mut self.0.borrow_mut())
        }
    }

    // backend stand-in that stays pending for one poll before resolving
    #[derive(Default)]
    struct SlowBackend {
        polled: bool,
    }

    impl Future for SlowBackend {
        type Output = ();

        fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
            let backend = self.get_mut();
            if backend.polled {
                Poll::Ready(())
            } else {
                backend.polled = true;
                cx.waker().wake_by_ref();
                Poll::Pending
            }
        }
    }

    fn poll_once<F: Future>(fut: Pin<&mut F>) -> Poll<F::Output> {
        fut.poll(&mut Context::from_waker(Waker::noop()))
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: String::from("A"),
            email: String::from("a@b.com"),
            subject: String::from("S"),
            message: String::from("M"),
        }
    }

    fn filled_state() -> Rc<RefCell<SubmissionState>> {
        Rc::new(RefCell::new(SubmissionState {
            form: filled(),
            ..SubmissionState::default()
        }))
    }

    #[test]
    fn set_updates_exactly_one_field() {
        let mut form = ContactForm::default();
        form.set(FormField::Email, String::from("x@y.com"));

        assert_eq!(form.email, "x@y.com");
        assert_eq!(form.name, "");
        assert_eq!(form.subject, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut form = filled();
        form.set(FormField::Name, String::from("B"));

        assert_eq!(form.name, "B");
        assert_eq!(form.email, "a@b.com");
    }

    #[test]
    fn clear_resets_all_fields() {
        let mut form = filled();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn submission_clears_form_and_returns_to_idle() {
        let state = filled_state();
        let mut run = pin!(run_submission(
            SharedState(Rc::clone(&state)),
            SlowBackend::default()
        ));

        // backend still pending: in flight, no status yet
        assert_eq!(poll_once(run.as_mut()), Poll::Pending);
        assert_eq!(state.borrow().phase, SubmitPhase::Submitting);
        assert_eq!(state.borrow().status, "");

        assert_eq!(poll_once(run.as_mut()), Poll::Ready(true));
        let done = state.borrow();
        assert_eq!(done.form, ContactForm::default());
        assert_eq!(done.phase, SubmitPhase::Idle);
        assert_eq!(done.status, SUCCESS_MESSAGE);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let state = filled_state();
        let mut first = pin!(run_submission(
            SharedState(Rc::clone(&state)),
            SlowBackend::default()
        ));
        assert_eq!(poll_once(first.as_mut()), Poll::Pending);

        // the repeat resolves immediately without touching anything
        let mut second = pin!(run_submission(
            SharedState(Rc::clone(&state)),
            SlowBackend::default()
        ));
        assert_eq!(poll_once(second.as_mut()), Poll::Ready(false));
        assert_eq!(state.borrow().form, filled());
        assert_eq!(state.borrow().phase, SubmitPhase::Submitting);

        // the original submission still completes normally
        assert_eq!(poll_once(first.as_mut()), Poll::Ready(true));
        assert_eq!(state.borrow().phase, SubmitPhase::Idle);
        assert_eq!(state.borrow().form, ContactForm::default());
    }
}
