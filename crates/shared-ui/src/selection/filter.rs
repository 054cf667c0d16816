use std::fmt::Display;

/// Case-insensitive substring filter over a display list.
///
/// Returns the items whose text contains `query`, in their original order.
/// An empty query returns every item.
pub fn filter_items<T: Clone + Display>(items: &[T], query: &str) -> Vec<T> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.to_string().to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
