use dioxus::prelude::*;
use shared_types::{AppError, RegisterRequest};
use shared_ui::{Alert, Button, Card, TextField};
use std::collections::HashMap;
use validator::Validate;

use crate::auth::{use_auth, use_auth_client};
use crate::routes::Route;

/// Client-side checks: the DTO's own rules plus the confirmation field.
fn check_registration(
    request: &RegisterRequest,
    confirm_password: &str,
) -> HashMap<String, String> {
    let mut errors = match request.validate() {
        Ok(()) => HashMap::new(),
        Err(errors) => AppError::from(errors).field_errors,
    };
    if request.password != confirm_password {
        errors
            .entry("confirm_password".to_string())
            .or_insert_with(|| "Passwords do not match".to_string());
    }
    errors
}

#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let client = use_auth_client();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Home {});
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let request = RegisterRequest {
            name: name(),
            email: email(),
            phone: phone(),
            password: password(),
        };
        let errors = check_registration(&request, &confirm());
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match client.register(&request).await {
                Ok(response) => {
                    auth.set_user(response.user);
                    navigator().push(Route::Home {});
                }
                Err(err) if !err.field_errors.is_empty() => field_errors.set(err.field_errors),
                Err(err) => error_msg.set(Some(err.message)),
            }
            loading.set(false);
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card", title: "Create your account", subtitle: "Fourteen days free. No card needed.",
                if let Some(err) = error_msg() {
                    Alert { message: err }
                }
                form { class: "auth-form", onsubmit: handle_register,
                    TextField {
                        name: "name",
                        label: "Full name",
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
                    TextField {
                        name: "phone",
                        label: "Mobile number",
                        input_type: "tel",
                        value: phone(),
                        error: error_for("phone"),
                        on_input: move |value: String| {
                            phone.set(value);
                            field_errors.write().remove("phone");
                        },
                    }
                    TextField {
                        name: "password",
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        error: error_for("password"),
                        on_input: move |value: String| {
                            password.set(value);
                            field_errors.write().remove("password");
                        },
                    }
                    TextField {
                        name: "confirm_password",
                        label: "Confirm password",
                        input_type: "password",
                        value: confirm(),
                        error: error_for("confirm_password"),
                        on_input: move |value: String| {
                            confirm.set(value);
                            field_errors.write().remove("confirm_password");
                        },
                    }
                    Button { button_type: "submit", busy: loading(), class: "auth-submit",
                        if loading() { "Creating account..." } else { "Create account" }
                    }
                }
                p { class: "auth-link",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
