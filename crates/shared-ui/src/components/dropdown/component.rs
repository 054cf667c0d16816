use dioxus::prelude::*;

use crate::scoped::{use_scoped_resource, DocumentResource, OutsideClickScope, ResourceId};
use crate::selection::{
    Cardinality, CloseReason, DropdownVariant, PanelBody, SelectionMachine, NO_RESULTS,
};

pub type MachineSignal<C> = Signal<SelectionMachine<String, C>>;

/// Element id used as the dropdown's outside-click boundary.
///
/// Falls back to a generated id when the caller does not supply one.
pub fn use_boundary_id(id: Option<String>) -> String {
    use_hook(move || id.unwrap_or_else(|| format!("cf-dropdown-{}", ResourceId::next().as_u64())))
}

/// State every dropdown shell starts from: the selection machine, the
/// boundary id, and an outside-click watch held while the panel is open.
pub fn use_dropdown<C>(
    variant: DropdownVariant,
    id: Option<String>,
    outside_click: Option<OutsideClickScope>,
) -> (MachineSignal<C>, String)
where
    C: Cardinality<String> + 'static,
{
    let mut machine = use_signal(SelectionMachine::<String, C>::default);
    let boundary_id = use_boundary_id(id);
    let is_open = use_memo(move || machine.read().is_open());

    use_scoped_resource(
        is_open,
        DocumentResource::OutsideClick {
            boundary_id: boundary_id.clone(),
            scope: outside_click.unwrap_or(variant.default_outside_click()),
        },
        move || {
            machine.write().close(CloseReason::OutsideClick);
        },
    );

    (machine, boundary_id)
}

/// Escape closes. Enter while open commits the only filtered item, if there
/// is exactly one, and keeps the key from reaching enclosing forms.
pub fn handle_dropdown_key<C>(
    evt: KeyboardEvent,
    mut machine: MachineSignal<C>,
    value: &C::Value,
    items: &[String],
    on_change: EventHandler<C::Value>,
) where
    C: Cardinality<String> + 'static,
    C::Value: 'static,
{
    match evt.key() {
        Key::Escape => {
            if machine.write().close(CloseReason::Escape) {
                evt.stop_propagation();
            }
        }
        Key::Enter if machine.peek().is_open() => {
            evt.prevent_default();
            evt.stop_propagation();
            let next = machine.write().confirm(value, items);
            if let Some(next) = next {
                on_change.call(next);
            }
        }
        _ => {}
    }
}

/// The status line that replaces the whole control while loading or failed.
pub fn status_view(body: &PanelBody<String>) -> Option<Element> {
    match body {
        PanelBody::Loading(message) => Some(rsx! {
            DropdownStatus { state: "loading", message: message.clone() }
        }),
        PanelBody::Error(message) => Some(rsx! {
            DropdownStatus { state: "error", message: message.clone() }
        }),
        _ => None,
    }
}

#[component]
pub fn DropdownStylesheet() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
    }
}

/// Loading or error line rendered in place of the whole dropdown.
#[component]
pub fn DropdownStatus(state: &'static str, message: String) -> Element {
    rsx! {
        DropdownStylesheet {}
        div { class: "dropdown-status", "data-state": state, role: "status", "{message}" }
    }
}

/// Outer element: the outside-click boundary and keyboard target.
#[component]
pub fn DropdownFrame(
    boundary_id: String,
    variant: DropdownVariant,
    open: bool,
    on_key: EventHandler<KeyboardEvent>,
    children: Element,
) -> Element {
    rsx! {
        DropdownStylesheet {}
        div {
            id: "{boundary_id}",
            class: "dropdown",
            "data-variant": variant.class(),
            "data-open": open,
            onkeydown: move |evt| on_key.call(evt),
            {children}
        }
    }
}

/// Open panel: search box, optional "Select all" row, then the options or
/// the no-results row. Renders nothing for a hidden or status body.
#[component]
pub fn DropdownPanel(
    body: PanelBody<String>,
    selected: Vec<String>,
    #[props(default = false)] multiple: bool,
    #[props(default = true)] searchable: bool,
    #[props(default)] search_term: String,
    #[props(default)] search_placeholder: String,
    #[props(default = false)] all_selected: bool,
    #[props(default)] on_select_all: Option<EventHandler<()>>,
    on_search: EventHandler<String>,
    on_pick: EventHandler<String>,
) -> Element {
    let visible = match body {
        PanelBody::Items(items) => items,
        PanelBody::Empty => Vec::new(),
        _ => return rsx! {},
    };
    let no_results = visible.is_empty();

    rsx! {
        div {
            class: "dropdown-panel",
            role: "listbox",
            "aria-multiselectable": if multiple { "true" } else { "false" },
            if searchable {
                DropdownSearch {
                    value: search_term,
                    placeholder: search_placeholder,
                    on_input: on_search,
                }
            }
            if let Some(select_all) = on_select_all {
                div {
                    class: "dropdown-option dropdown-select-all",
                    role: "option",
                    "aria-selected": if all_selected { "true" } else { "false" },
                    "data-selected": all_selected,
                    onclick: move |_| select_all.call(()),
                    span { class: "dropdown-check", if all_selected { "\u{2611}" } else { "\u{2610}" } }
                    span { class: "dropdown-option-label", "Select all" }
                }
            }
            if no_results {
                DropdownEmpty {}
            }
            for item in visible {
                DropdownOption {
                    key: "{item}",
                    label: item.clone(),
                    selected: selected.contains(&item),
                    checkbox: multiple,
                    on_pick: {
                        let item = item.clone();
                        move |_| on_pick.call(item.clone())
                    },
                }
            }
        }
    }
}

/// Search box at the top of an open panel. Focuses itself when mounted.
#[component]
pub fn DropdownSearch(value: String, placeholder: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "dropdown-search",
            r#type: "text",
            value: value,
            placeholder: placeholder,
            onmounted: move |evt: MountedEvent| async move {
                let _ = evt.set_focus(true).await;
            },
            oninput: move |evt: FormEvent| on_input.call(evt.value()),
        }
    }
}

#[component]
pub fn DropdownEmpty() -> Element {
    rsx! {
        div { class: "dropdown-empty", "aria-disabled": "true", "{NO_RESULTS}" }
    }
}

/// One option row. `checkbox` renders a tick box for multi-select panels.
#[component]
pub fn DropdownOption(
    label: String,
    selected: bool,
    #[props(default = false)] checkbox: bool,
    on_pick: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "dropdown-option",
            role: "option",
            "aria-selected": if selected { "true" } else { "false" },
            "data-selected": selected,
            onclick: move |_| on_pick.call(()),
            if checkbox {
                span { class: "dropdown-check", if selected { "\u{2611}" } else { "\u{2610}" } }
            } else {
                span { class: "dropdown-check", if selected { "\u{2713}" } else { "" } }
            }
            span { class: "dropdown-option-label", "{label}" }
        }
    }
}
