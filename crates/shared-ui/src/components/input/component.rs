use dioxus::prelude::*;

/// Labelled form field. Shows `error` under the control and marks it invalid.
#[component]
pub fn TextField(
    name: String,
    #[props(default)] label: String,
    #[props(default)] value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    /// Renders a textarea instead of an input.
    #[props(default = false)]
    multiline: bool,
    #[props(default)] error: Option<String>,
    #[props(default = false)] disabled: bool,
) -> Element {
    let field_id = format!("field-{name}");
    let error_id = format!("{field_id}-error");
    let invalid = error.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "field", "data-invalid": invalid,
            if !label.is_empty() {
                label { class: "field-label", r#for: "{field_id}", "{label}" }
            }
            if multiline {
                textarea {
                    id: "{field_id}",
                    class: "field-control",
                    name: "{name}",
                    rows: 5,
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    "aria-invalid": invalid,
                    "aria-describedby": if invalid { error_id.clone() } else { String::new() },
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: "{field_id}",
                    class: "field-control",
                    name: "{name}",
                    r#type: "{input_type}",
                    value: value,
                    placeholder: placeholder,
                    disabled: disabled,
                    "aria-invalid": invalid,
                    "aria-describedby": if invalid { error_id.clone() } else { String::new() },
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
            if let Some(message) = error {
                p { id: "{error_id}", class: "field-error", "{message}" }
            }
        }
    }
}
