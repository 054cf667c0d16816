use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdInfo, LdShield};
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertTone {
    #[default]
    Error,
    Success,
    Info,
}

impl AlertTone {
    fn class(&self) -> &'static str {
        match self {
            AlertTone::Error => "error",
            AlertTone::Success => "success",
            AlertTone::Info => "info",
        }
    }
}

/// Inline notice: icon, message and at most one recovery action.
#[component]
pub fn Alert(
    message: String,
    #[props(default)] tone: AlertTone,
    #[props(default)] title: String,
    #[props(default)] action_label: Option<String>,
    #[props(default)] on_action: Option<EventHandler<()>>,
) -> Element {
    let role = match tone {
        AlertTone::Error => "alert",
        _ => "status",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert", "data-tone": tone.class(), role: role,
            span { class: "alert-icon",
                match tone {
                    AlertTone::Error => rsx! { Icon::<LdShield> { icon: LdShield, width: 20, height: 20 } },
                    AlertTone::Success => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 20, height: 20 } },
                    AlertTone::Info => rsx! { Icon::<LdInfo> { icon: LdInfo, width: 20, height: 20 } },
                }
            }
            div { class: "alert-body",
                if !title.is_empty() {
                    p { class: "alert-title", "{title}" }
                }
                p { class: "alert-message", "{message}" }
            }
            if let (Some(label), Some(handler)) = (action_label, on_action) {
                button {
                    class: "alert-action",
                    r#type: "button",
                    onclick: move |_| handler.call(()),
                    "{label}"
                }
            }
        }
    }
}
