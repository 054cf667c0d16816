use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFilter;
use dioxus_free_icons::Icon;

use crate::components::dropdown::{
    handle_dropdown_key, status_view, use_dropdown, DropdownFrame, DropdownPanel,
};
use crate::scoped::OutsideClickScope;
use crate::selection::{panel_body, search_placeholder, DropdownVariant, ListStatus, One};

/// Compact single-value filter for a results list: filter icon, label and
/// current value on the trigger. Owns its outside-click listener unless told
/// otherwise.
#[component]
pub fn ResultsFilter(
    items: Vec<String>,
    #[props(default)] value: Option<String>,
    on_change: EventHandler<Option<String>>,
    #[props(default = "All".to_string())] placeholder: String,
    #[props(default = false)] searchable: bool,
    #[props(default)] label: String,
    #[props(default)] status: ListStatus,
    #[props(default)] outside_click: Option<OutsideClickScope>,
    #[props(default)] id: Option<String>,
) -> Element {
    let variant = DropdownVariant::ResultsFilter;
    let (mut machine, boundary_id) = use_dropdown::<One>(variant, id, outside_click);

    let snapshot = machine.read().clone();
    let open = snapshot.is_open();
    let body = panel_body(open, &status, &items, snapshot.search_term());
    if let Some(status_line) = status_view(&body) {
        return status_line;
    }
    let current = snapshot.display_text(&value, &placeholder);

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
                span { class: "dropdown-icon",
                    Icon::<LdFilter> { icon: LdFilter, width: 14, height: 14 }
                }
                if !label.is_empty() {
                    span { class: "dropdown-label", "{label}:" }
                }
                span { class: "dropdown-value", "{current}" }
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
