//! Search filtering for the category list
//!
//! Plain case-insensitive substring matching on code and name. Order is
//! preserved so the list keeps the server's ordering.

use crate::types::Category;

/// Whether `category` matches an already-lowercased search needle
fn matches(category: &Category, needle: &str) -> bool {
    category.code.to_lowercase().contains(needle) || category.name.to_lowercase().contains(needle)
}

/// Categories whose code or name contains `query`, ignoring case
pub fn filter_categories<'a>(categories: &'a [Category], query: &str) -> Vec<&'a Category> {
    if query.is_empty() {
        return categories.iter().collect();
    }

    let needle = query.to_lowercase();
    categories.iter().filter(|c| matches(c, &needle)).collect()
}
