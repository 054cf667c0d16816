use dioxus::prelude::*;

use crate::components::dropdown::{
    handle_dropdown_key, status_view, use_dropdown, DropdownFrame, DropdownPanel,
};
use crate::scoped::OutsideClickScope;
use crate::selection::{panel_body, search_placeholder, DropdownVariant, ListStatus, One};

/// Single-value dropdown with an optional search box. Closes on pick.
///
/// Controlled: `value` is owned by the caller and `on_change` receives the
/// full new value.
#[component]
pub fn SearchableSelect(
    items: Vec<String>,
    #[props(default)] value: Option<String>,
    on_change: EventHandler<Option<String>>,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default = true)] searchable: bool,
    /// Used to build the search placeholder, e.g. "Courts" -> "Search courts...".
    #[props(default)]
    label: String,
    #[props(default)] status: ListStatus,
    /// Overrides the default listener ownership (shared).
    #[props(default)]
    outside_click: Option<OutsideClickScope>,
    #[props(default)] id: Option<String>,
) -> Element {
    let variant = DropdownVariant::SingleSearchable;
    let (mut machine, boundary_id) = use_dropdown::<One>(variant, id, outside_click);

    let snapshot = machine.read().clone();
    let open = snapshot.is_open();
    let body = panel_body(open, &status, &items, snapshot.search_term());
    if let Some(status_line) = status_view(&body) {
        return status_line;
    }
    let trigger_text = snapshot.display_text(&value, &placeholder);

    let on_key = {
        let value = value.clone();
        move |evt: KeyboardEvent| handle_dropdown_key(evt, machine, &value, &items, on_change)
    };
    let on_pick = {
        let value = value.clone();
        move |item: String| {
            let next = machine.write().pick(&value, &item);
            on_change.call(next);
        }
    };

    rsx! {
        DropdownFrame { boundary_id, variant, open, on_key,
            button {
                class: "dropdown-trigger",
                r#type: "button",
                "aria-haspopup": "listbox",
                "aria-expanded": open,
                "data-placeholder": value.is_none(),
                onclick: move |_| machine.write().toggle(),
                span { class: "dropdown-value", "{trigger_text}" }
                span { class: "dropdown-chevron", if open { "\u{25B2}" } else { "\u{25BC}" } }
            }
            DropdownPanel {
                body,
                selected: value.iter().cloned().collect::<Vec<_>>(),
                searchable,
                search_term: snapshot.search_term().to_string(),
                search_placeholder: search_placeholder(&label),
                on_search: move |term: String| machine.write().set_search(term),
                on_pick,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn courts() -> Vec<String> {
        vec!["Supreme Court".to_string(), "High Court".to_string()]
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn closed_select_shows_placeholder_only() {
        fn app() -> Element {
            rsx! {
                SearchableSelect {
                    items: courts(),
                    placeholder: "Any court",
                    on_change: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Any court"));
        assert!(!html.contains("High Court"));
        assert!(!html.contains("dropdown-panel"));
    }

    #[test]
    fn closed_select_shows_current_value() {
        fn app() -> Element {
            rsx! {
                SearchableSelect {
                    items: courts(),
                    value: Some("High Court".to_string()),
                    on_change: move |_| {},
                }
            }
        }
        assert!(render(app).contains("High Court"));
    }

    #[test]
    fn loading_status_replaces_trigger() {
        fn app() -> Element {
            rsx! {
                SearchableSelect {
                    items: courts(),
                    status: ListStatus::loading(),
                    on_change: move |_| {},
                }
            }
        }
        let html = render(app);
        assert!(html.contains("Loading..."));
        assert!(!html.contains("dropdown-trigger"));
    }
}
