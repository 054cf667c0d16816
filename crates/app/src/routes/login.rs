use dioxus::prelude::*;
use shared_types::{AppError, LoginRequest};
use shared_ui::{Alert, Button, Card, TextField};
use std::collections::HashMap;
use validator::Validate;

use crate::auth::{use_auth, use_auth_client};
use crate::routes::Route;

#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let client = use_auth_client();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    if auth.is_authenticated() {
        navigator().push(Route::Home {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let request = LoginRequest {
            email: email(),
            password: password(),
        };
        if let Err(errors) = request.validate() {
            field_errors.set(AppError::from(errors).field_errors);
            return;
        }
        let client = client.clone();
        spawn(async move {
            loading.set(true);
            error_msg.set(None);
            match client.login(&request).await {
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

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-page",
            Card { class: "auth-card", title: "Sign in", subtitle: "Welcome back. Pick up your research where you left it.",
                if let Some(err) = error_msg() {
                    Alert { message: err }
                }
                form { class: "auth-form", onsubmit: handle_login,
                    TextField {
                        name: "email",
                        label: "Email",
                        input_type: "email",
                        placeholder: "you@example.com",
                        value: email(),
                        error: field_errors.read().get("email").cloned(),
                        on_input: move |value: String| {
                            email.set(value);
                            field_errors.write().remove("email");
                        },
                    }
                    TextField {
                        name: "password",
                        label: "Password",
                        input_type: "password",
                        value: password(),
                        error: field_errors.read().get("password").cloned(),
                        on_input: move |value: String| {
                            password.set(value);
                            field_errors.write().remove("password");
                        },
                    }
                    Button { button_type: "submit", busy: loading(), class: "auth-submit",
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }
                p { class: "auth-link",
                    "New here? "
                    Link { to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}
