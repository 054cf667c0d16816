use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }
        div { class: "not-found-page container",
            div { class: "not-found-code", "404" }
            h1 { class: "not-found-title", "We couldn't find that page" }
            p { class: "not-found-message",
                "Nothing lives at "
                code { "{path}" }
                ". Try a search from the home page instead."
            }
            Link { to: Route::Home {}, class: "not-found-link", "Back to home" }
        }
    }
}
