use dioxus::prelude::*;

/// Bordered content block with an optional heading.
#[component]
pub fn Card(
    #[props(default)] title: String,
    #[props(default)] subtitle: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            if !title.is_empty() {
                div { class: "card-header",
                    h3 { class: "card-title", "{title}" }
                    if !subtitle.is_empty() {
                        p { class: "card-subtitle", "{subtitle}" }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}

/// One judgment section: anchored heading and body text. Placeholder bodies
/// are marked so they can be styled muted.
#[component]
pub fn SectionCard(
    anchor: &'static str,
    title: &'static str,
    body: String,
    #[props(default = true)] available: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section { id: anchor, class: "card section-card", "data-available": available,
            h3 { class: "card-title", "{title}" }
            div { class: "section-card-body",
                for (i, paragraph) in body.split("\n\n").enumerate() {
                    p { key: "{i}", "{paragraph}" }
                }
            }
        }
    }
}
