use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

use crate::scoped::{use_mounted_resource, DocumentResource};

/// Full-screen overlay. Locks page scroll and listens for Escape for as long
/// as it is mounted; render it conditionally.
#[component]
pub fn Modal(
    on_close: EventHandler<()>,
    #[props(default)] title: String,
    children: Element,
) -> Element {
    use_mounted_resource(DocumentResource::ScrollLock, || {});
    use_mounted_resource(DocumentResource::EscapeKey, move || on_close.call(()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "modal-overlay",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "{title}",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-panel",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    r#type: "button",
                    "aria-label": "Close",
                    onclick: move |_| on_close.call(()),
                    Icon::<LdX> { icon: LdX, width: 20, height: 20 }
                }
                if !title.is_empty() {
                    h2 { class: "modal-title", "{title}" }
                }
                {children}
            }
        }
    }
}
