use std::fmt::{self, Display};
use std::marker::PhantomData;

use super::filter::filter_items;

/// Why a panel closed. Every reason clears the search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Toggle,
    OutsideClick,
    Picked,
    Escape,
}

/// Open/closed flag plus the active search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
    search_term: String,
}

impl PanelState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns `true` if the panel was closed before.
    pub fn open(&mut self) -> bool {
        let opened = !self.open;
        self.open = true;
        opened
    }

    /// Returns `true` if the panel was open before.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        let was_open = self.open;
        self.open = false;
        self.search_term.clear();
        if was_open {
            tracing::trace!(?reason, "selection panel closed");
        }
        was_open
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close(CloseReason::Toggle);
        } else {
            self.open();
        }
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }
}

/// Whether picking an item closes the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePolicy {
    OnPick,
    StayOpen,
}

/// How many items a dropdown holds and what picking one does to the value.
pub trait Cardinality<T> {
    type Value: Clone + PartialEq + Default;

    const CLOSE_POLICY: ClosePolicy;

    /// Compute the next full value after `item` is picked.
    fn pick(current: &Self::Value, item: &T) -> Self::Value;

    fn selected(value: &Self::Value) -> &[T];

    fn is_selected(value: &Self::Value, item: &T) -> bool;
}

/// Exactly zero or one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct One;

/// Any subset of the items; picking toggles membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Many;

impl<T: Clone + PartialEq> Cardinality<T> for One {
    type Value = Option<T>;

    const CLOSE_POLICY: ClosePolicy = ClosePolicy::OnPick;

    fn pick(_current: &Option<T>, item: &T) -> Option<T> {
        Some(item.clone())
    }

    fn selected(value: &Option<T>) -> &[T] {
        value.as_slice()
    }

    fn is_selected(value: &Option<T>, item: &T) -> bool {
        value.as_ref() == Some(item)
    }
}

impl<T: Clone + PartialEq> Cardinality<T> for Many {
    type Value = Vec<T>;

    const CLOSE_POLICY: ClosePolicy = ClosePolicy::StayOpen;

    fn pick(current: &Vec<T>, item: &T) -> Vec<T> {
        if current.contains(item) {
            current.iter().filter(|v| *v != item).cloned().collect()
        } else {
            let mut next = current.clone();
            next.push(item.clone());
            next
        }
    }

    fn selected(value: &Vec<T>) -> &[T] {
        value.as_slice()
    }

    fn is_selected(value: &Vec<T>, item: &T) -> bool {
        value.contains(item)
    }
}

/// Trigger text for a closed control: placeholder, the lone item, or a count.
pub fn display_text<T: Display>(selected: &[T], placeholder: &str) -> String {
    match selected {
        [] => placeholder.to_string(),
        [only] => only.to_string(),
        many => format!("{} selected", many.len()),
    }
}

/// Shared open/search/pick behavior for every dropdown shell.
///
/// The selected value itself is owned by the caller; this machine only
/// computes the next value, which the shell hands to its change callback.
pub struct SelectionMachine<T, C> {
    panel: PanelState,
    _marker: PhantomData<fn() -> (T, C)>,
}

impl<T, C> Default for SelectionMachine<T, C> {
    fn default() -> Self {
        Self {
            panel: PanelState::default(),
            _marker: PhantomData,
        }
    }
}

impl<T, C> Clone for SelectionMachine<T, C> {
    fn clone(&self) -> Self {
        Self {
            panel: self.panel.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, C> PartialEq for SelectionMachine<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.panel == other.panel
    }
}

impl<T, C> fmt::Debug for SelectionMachine<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionMachine")
            .field("panel", &self.panel)
            .finish()
    }
}

impl<T, C> SelectionMachine<T, C>
where
    T: Clone + PartialEq + Display,
    C: Cardinality<T>,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    pub fn search_term(&self) -> &str {
        self.panel.search_term()
    }

    pub fn open(&mut self) -> bool {
        self.panel.open()
    }

    pub fn close(&mut self, reason: CloseReason) -> bool {
        self.panel.close(reason)
    }

    pub fn toggle(&mut self) {
        self.panel.toggle();
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.panel.set_search(term);
    }

    /// Items matching the current search term.
    pub fn visible(&self, items: &[T]) -> Vec<T> {
        filter_items(items, self.panel.search_term())
    }

    pub fn pick(&mut self, current: &C::Value, item: &T) -> C::Value {
        let next = C::pick(current, item);
        if C::CLOSE_POLICY == ClosePolicy::OnPick {
            self.panel.close(CloseReason::Picked);
        }
        next
    }

    /// Confirm key: commits the only visible item, if there is exactly one.
    pub fn confirm(&mut self, current: &C::Value, items: &[T]) -> Option<C::Value> {
        if !self.is_open() {
            return None;
        }
        match self.visible(items).as_slice() {
            [only] => Some(self.pick(current, only)),
            _ => None,
        }
    }

    pub fn display_text(&self, value: &C::Value, placeholder: &str) -> String {
        display_text(C::selected(value), placeholder)
    }

    pub fn is_selected(&self, value: &C::Value, item: &T) -> bool {
        C::is_selected(value, item)
    }
}

impl<T> SelectionMachine<T, Many>
where
    T: Clone + PartialEq + Display,
{
    /// Select every item, or clear when everything is already selected.
    /// Ignores the active search term.
    pub fn select_all(&self, current: &[T], items: &[T]) -> Vec<T> {
        if current.len() == items.len() {
            Vec::new()
        } else {
            items.to_vec()
        }
    }

    pub fn all_selected(&self, current: &[T], items: &[T]) -> bool {
        !items.is_empty() && current.len() == items.len()
    }
}
