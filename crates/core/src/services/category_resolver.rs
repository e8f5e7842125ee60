//! Category id → display name → icon key.
//!
//! Both lookups are total: unknown ids resolve to [`UNKNOWN_CATEGORY`] and
//! unknown names to the table's fallback icon.

use crate::models::category::Category;

/// Name shown for a record whose category id matches nothing.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Icon used in transaction lists for names missing from [`NAV_ICONS`].
pub const DEFAULT_ICON_KEY: &str = "default";

/// Icon used in the category picker for names missing from [`PICKER_ICONS`].
pub const DEFAULT_PICKER_ICON_KEY: &str = "other";

/// Transaction-list icons, keyed by exact (case-sensitive) category name.
pub const NAV_ICONS: [(&str, &str); 7] = [
    ("Groceries", "groceries"),
    ("Entertainment", "movie"),
    ("Healthcare", "health"),
    ("Housing", "house"),
    ("Transportation", "car"),
    ("Utilities", "other"),
    ("Salary", "cash"),
];

/// Category picker icons. Same names, larger artwork.
pub const PICKER_ICONS: [(&str, &str); 7] = [
    ("Groceries", "groceries"),
    ("Entertainment", "movie_tickets"),
    ("Healthcare", "health_insurance"),
    ("Housing", "house"),
    ("Transportation", "car"),
    ("Utilities", "maintenance"),
    ("Salary", "cash"),
];

fn lookup(table: &[(&str, &'static str)], name: &str, fallback: &'static str) -> &'static str {
    table
        .iter()
        .find(|(known, _)| *known == name)
        .map_or(fallback, |(_, key)| *key)
}

/// Name of the first category with this id, or `"Unknown"`.
#[must_use]
pub fn resolve_name(category_id: &str, categories: &[Category]) -> String {
    categories
        .iter()
        .find(|c| c.id == category_id)
        .map_or_else(|| UNKNOWN_CATEGORY.to_string(), |c| c.name.clone())
}

/// Transaction-list icon key for a category id.
#[must_use]
pub fn resolve_icon_key(category_id: &str, categories: &[Category]) -> &'static str {
    icon_key_for_name(&resolve_name(category_id, categories))
}

#[must_use]
pub fn icon_key_for_name(name: &str) -> &'static str {
    lookup(&NAV_ICONS, name, DEFAULT_ICON_KEY)
}

#[must_use]
pub fn picker_icon_key(name: &str) -> &'static str {
    lookup(&PICKER_ICONS, name, DEFAULT_PICKER_ICON_KEY)
}
