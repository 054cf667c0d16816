use dioxus::prelude::*;

/// Pulsing placeholder bars shown while content loads.
#[component]
pub fn Skeleton(
    #[props(default = 1)] lines: usize,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { "aria-busy": "true", ..merged,
            for i in 0..lines.max(1) {
                div { key: "{i}", class: "skeleton-line" }
            }
        }
    }
}
