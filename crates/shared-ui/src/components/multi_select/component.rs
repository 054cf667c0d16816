use dioxus::prelude::*;

use crate::components::dropdown::{
    handle_dropdown_key, status_view, use_dropdown, DropdownFrame, DropdownPanel,
};
use crate::scoped::OutsideClickScope;
use crate::selection::{panel_body, search_placeholder, DropdownVariant, ListStatus, Many};

/// Multi-value dropdown. Picking toggles an item and keeps the panel open.
///
/// A "Select all" row sits above the options whenever there is something to
/// select; it selects the full list regardless of the search term, or clears
/// the selection when everything is already selected.
#[component]
pub fn MultiSelect(
    items: Vec<String>,
    #[props(default)] value: Vec<String>,
    on_change: EventHandler<Vec<String>>,
    #[props(default = "Select...".to_string())] placeholder: String,
    #[props(default = true)] searchable: bool,
    #[props(default)] label: String,
    #[props(default)] status: ListStatus,
    #[props(default)] outside_click: Option<OutsideClickScope>,
    #[props(default)] id: Option<String>,
) -> Element {
    let variant = DropdownVariant::MultiSearchable;
    let (mut machine, boundary_id) = use_dropdown::<Many>(variant, id, outside_click);

    let snapshot = machine.read().clone();
    let open = snapshot.is_open();
    let body = panel_body(open, &status, &items, snapshot.search_term());
    if let Some(status_line) = status_view(&body) {
        return status_line;
    }
    let trigger_text = snapshot.display_text(&value, &placeholder);
    let all_selected = snapshot.all_selected(&value, &items);

    let select_all = (!items.is_empty()).then(|| {
        let value = value.clone();
        let items = items.clone();
        EventHandler::new(move |_: ()| {
            let next = machine.peek().select_all(&value, &items);
            on_change.call(next);
        })
    });
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
                "data-placeholder": value.is_empty(),
                onclick: move |_| machine.write().toggle(),
                span { class: "dropdown-value", "{trigger_text}" }
                span { class: "dropdown-chevron", if open { "\u{25B2}" } else { "\u{25BC}" } }
            }
            DropdownPanel {
                body,
                selected: value.clone(),
                multiple: true,
                searchable,
                search_term: snapshot.search_term().to_string(),
                search_placeholder: search_placeholder(&label),
                all_selected,
                on_select_all: select_all,
                on_search: move |term: String| machine.write().set_search(term),
                on_pick,
            }
        }
    }
}
