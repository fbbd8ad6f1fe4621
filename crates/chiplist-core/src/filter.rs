//! Case-insensitive substring filtering of items by name.

use crate::models::Item;

/// Whether `item.name` contains `query`, ignoring case. An empty query matches everything.
pub fn matches(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the items whose name contains `query` (case-insensitive), in input order.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches(item, query))
        .cloned()
        .collect()
}
