use api::ContentClient;
use dioxus::prelude::*;
use shared_types::{AppError, ContactRequest, CONTACT_TOPICS};
use shared_ui::{Alert, AlertTone, Button, Card, SearchableSelect, TextField};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Clone, PartialEq)]
enum Outcome {
    Sent,
    Failed(String),
}

#[component]
pub fn Contact() -> Element {
    let content: ContentClient = use_context();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut topic = use_signal(|| Option::<String>::None);
    let mut message = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut outcome = use_signal(|| Option::<Outcome>::None);
    let mut sending = use_signal(|| false);

    let topics: Vec<String> = CONTACT_TOPICS.iter().map(|t| t.to_string()).collect();

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = ContactRequest {
            name: name(),
            email: email(),
            topic: topic().unwrap_or_default(),
            message: message(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(AppError::from(errors).field_errors);
            return;
        }
        let client = content.clone();
        spawn(async move {
            sending.set(true);
            outcome.set(None);
            match client.submit_contact(&request).await {
                Ok(()) => {
                    outcome.set(Some(Outcome::Sent));
                    name.set(String::new());
                    email.set(String::new());
                    topic.set(None);
                    message.set(String::new());
                }
                Err(err) => outcome.set(Some(Outcome::Failed(err.message))),
            }
            sending.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card contact-card", title: "Talk to us", subtitle: "Demos, institutional plans or anything else. We reply within a working day.",
                match outcome() {
                    Some(Outcome::Sent) => rsx! {
                        Alert { tone: AlertTone::Success, message: "Thanks, your message is on its way." }
                    },
                    Some(Outcome::Failed(reason)) => rsx! {
                        Alert { message: reason }
                    },
                    None => rsx! {},
                }
                form { class: "auth-form", onsubmit: handle_submit,
                    TextField {
                        name: "name",
                        label: "Name",
                        value: name(),
                        error: error_for("name"),
                        on_input: move |value: String| {
                            name.set(value);
                            field_errors.write().remove("name");
                        },
                    }
                    TextField {
                        name: "email",
                        label: "Email",
                        input_type: "email",
                        value: email(),
                        error: error_for("email"),
                        on_input: move |value: String| {
                            email.set(value);
                            field_errors.write().remove("email");
                        },
                    }
                    div { class: "field", "data-invalid": error_for("topic").is_some(),
                        span { class: "field-label", "Topic" }
                        SearchableSelect {
                            id: "contact-topic".to_string(),
                            items: topics,
                            value: topic(),
                            searchable: false,
                            placeholder: "Choose a topic",
                            on_change: move |next| {
                                topic.set(next);
                                field_errors.write().remove("topic");
                            },
                        }
                        if let Some(err) = error_for("topic") {
                            p { class: "field-error", "{err}" }
                        }
                    }
                    TextField {
                        name: "message",
                        label: "Message",
                        multiline: true,
                        value: message(),
                        error: error_for("message"),
                        on_input: move |value: String| {
                            message.set(value);
                            field_errors.write().remove("message");
                        },
                    }
                    Button { button_type: "submit", busy: sending(), class: "auth-submit",
                        if sending() { "Sending..." } else { "Send message" }
                    }
                }
            }
        }
    }
}
