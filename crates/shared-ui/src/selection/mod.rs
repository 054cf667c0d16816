//! Selection model shared by the dropdown shells.
//!
//! [`filter_items`] narrows an item list by a search term, and
//! [`SelectionMachine`] owns the open/closed + search state, parameterized by
//! [`Cardinality`] (`One` or `Many`). The shells in `components` are thin
//! views over these two pieces.

mod filter;
mod machine;

pub use filter::filter_items;
pub use machine::{
    display_text, Cardinality, CloseReason, ClosePolicy, Many, One, PanelState, SelectionMachine,
};

use std::fmt::Display;

use crate::scoped::OutsideClickScope;

/// Row shown when the search term matches nothing.
pub const NO_RESULTS: &str = "No results found";

/// Data-source status of a dropdown, orthogonal to open/closed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListStatus {
    #[default]
    Ready,
    Loading(String),
    Error(String),
}

impl ListStatus {
    pub fn loading() -> Self {
        ListStatus::Loading("Loading...".to_string())
    }

    /// Whether the trigger and list may be shown at all.
    pub fn is_interactive(&self) -> bool {
        matches!(self, ListStatus::Ready)
    }
}

/// What a dropdown renders below (or instead of) its trigger.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody<T> {
    /// Ready and closed.
    Hidden,
    Loading(String),
    Error(String),
    /// Open, but the search term matched nothing.
    Empty,
    Items(Vec<T>),
}

/// Resolve the panel body. Loading and error win over open/closed.
pub fn panel_body<T: Clone + Display>(
    open: bool,
    status: &ListStatus,
    items: &[T],
    search_term: &str,
) -> PanelBody<T> {
    match status {
        ListStatus::Loading(msg) => PanelBody::Loading(msg.clone()),
        ListStatus::Error(msg) => PanelBody::Error(msg.clone()),
        ListStatus::Ready if !open => PanelBody::Hidden,
        ListStatus::Ready => {
            let visible = filter_items(items, search_term);
            if visible.is_empty() {
                PanelBody::Empty
            } else {
                PanelBody::Items(visible)
            }
        }
    }
}

/// The three dropdown shells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownVariant {
    SingleSearchable,
    MultiSearchable,
    ResultsFilter,
}

impl DropdownVariant {
    /// Listener ownership used when the caller does not choose one.
    pub fn default_outside_click(&self) -> OutsideClickScope {
        match self {
            DropdownVariant::SingleSearchable | DropdownVariant::MultiSearchable => {
                OutsideClickScope::Shared
            }
            DropdownVariant::ResultsFilter => OutsideClickScope::PerInstance,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DropdownVariant::SingleSearchable => "single",
            DropdownVariant::MultiSearchable => "multi",
            DropdownVariant::ResultsFilter => "results-filter",
        }
    }
}

/// Placeholder for the search box, e.g. `Search courts...`.
pub fn search_placeholder(label: &str) -> String {
    if label.trim().is_empty() {
        "Search...".to_string()
    } else {
        format!("Search {}...", label.trim().to_lowercase())
    }
}
