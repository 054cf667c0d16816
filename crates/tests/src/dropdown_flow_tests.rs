use pretty_assertions::assert_eq;
use shared_ui::selection::{
    panel_body, CloseReason, ListStatus, Many, One, PanelBody, SelectionMachine,
};

fn countries() -> Vec<String> {
    ["India", "United Kingdom", "United States", "Singapore"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

#[test]
fn typing_down_to_one_match_then_confirming() {
    let items = countries();
    let mut machine = SelectionMachine::<String, One>::new();
    let mut value: Option<String> = None;

    machine.toggle();
    machine.set_search("united");
    assert_eq!(machine.visible(&items).len(), 2);
    assert_eq!(machine.confirm(&value, &items), None);
    assert!(machine.is_open());

    machine.set_search("united s");
    if let Some(next) = machine.confirm(&value, &items) {
        value = next;
    }
    assert_eq!(value.as_deref(), Some("United States"));
    assert!(!machine.is_open());
    assert_eq!(machine.search_term(), "");
    assert_eq!(machine.display_text(&value, "Country"), "United States");
}

#[test]
fn no_match_panel_and_reopen_clears_search() {
    let items = countries();
    let mut machine = SelectionMachine::<String, One>::new();

    machine.toggle();
    machine.set_search("zz");
    assert_eq!(
        panel_body(machine.is_open(), &ListStatus::Ready, &items, machine.search_term()),
        PanelBody::Empty
    );

    machine.close(CloseReason::OutsideClick);
    machine.toggle();
    assert_eq!(machine.search_term(), "");
    assert_eq!(machine.visible(&items).len(), items.len());
}

#[test]
fn multi_select_collects_then_select_all_ignores_search() {
    let items = countries();
    let mut machine = SelectionMachine::<String, Many>::new();
    let mut value: Vec<String> = Vec::new();

    machine.toggle();
    value = machine.pick(&value, &items[0]);
    value = machine.pick(&value, &items[3]);
    assert!(machine.is_open());
    assert_eq!(machine.display_text(&value, "Any"), "2 selected");

    machine.set_search("united");
    value = machine.select_all(&value, &items);
    assert_eq!(value, items);
    assert!(machine.all_selected(&value, &items));

    value = machine.select_all(&value, &items);
    assert!(value.is_empty());
    assert_eq!(machine.display_text(&value, "Any"), "Any");
}

#[test]
fn picking_a_selected_item_again_deselects_it() {
    let items = countries();
    let mut machine = SelectionMachine::<String, Many>::new();
    machine.toggle();
    let value = machine.pick(&Vec::new(), &items[1]);
    let value = machine.pick(&value, &items[1]);
    assert!(value.is_empty());
}

#[test]
fn loading_and_error_hide_the_list_even_when_open() {
    let items = countries();
    assert_eq!(
        panel_body(true, &ListStatus::loading(), &items, ""),
        PanelBody::Loading("Loading...".to_string())
    );
    assert_eq!(
        panel_body(false, &ListStatus::Error("Courts unavailable".into()), &items, ""),
        PanelBody::Error("Courts unavailable".to_string())
    );
}
