//! Static category metadata (display name and icon) keyed by category id.
//!
//! Metadata is configuration, not data: it is checked against the loaded dataset at
//! startup, and categories without an entry get a generated one.

use crate::data::VocabularyStore;

/// Reserved id for the union of every real category.
pub const ALL_CATEGORY: &str = "all";

const FALLBACK_ICON: &str = "📚";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryInfo {
    pub id: String,
    pub display_name: String,
    pub icon: String,
}

const CATEGORY_INFO: &[(&str, &str, &str)] = &[
    (ALL_CATEGORY, "All Words", "🌟"),
    ("home", "Home & Rooms", "🏠"),
    ("family", "Family & People", "👨‍👩‍👧‍👦"),
    ("food", "Food & Drink", "🍞"),
    ("transport", "Transport", "🚗"),
    ("places", "Places in Town", "🏪"),
    ("time", "Time & Days", "📅"),
    ("weather", "Weather & Seasons", "☀️"),
    ("clothing", "Clothing", "👕"),
    ("verbs", "Useful Verbs", "🏃‍♂️"),
    ("numbers", "Numbers", "🔢"),
];

pub fn is_known_category(id: &str) -> bool {
    CATEGORY_INFO.iter().any(|(known, _, _)| *known == id)
}

/// Metadata for `id`, generated from the id itself when the table has no entry.
pub fn category_info(id: &str) -> CategoryInfo {
    match CATEGORY_INFO.iter().find(|(known, _, _)| *known == id) {
        Some((id, name, icon)) => CategoryInfo {
            id: id.to_string(),
            display_name: name.to_string(),
            icon: icon.to_string(),
        },
        None => CategoryInfo {
            id: id.to_string(),
            display_name: id.to_string(),
            icon: FALLBACK_ICON.to_string(),
        },
    }
}

/// Mismatches between the metadata table and the loaded dataset.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CategoryReport {
    /// Dataset categories with no metadata entry.
    pub missing_metadata: Vec<String>,
    /// Metadata entries with no dataset category.
    pub missing_data: Vec<String>,
}

impl CategoryReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_metadata.is_empty() && self.missing_data.is_empty()
    }
}

pub fn validate_categories(store: &VocabularyStore) -> CategoryReport {
    let missing_metadata: Vec<String> = store
        .category_ids()
        .filter(|id| !is_known_category(id))
        .map(str::to_string)
        .collect();

    let missing_data: Vec<String> = CATEGORY_INFO
        .iter()
        .map(|(id, _, _)| *id)
        .filter(|id| *id != ALL_CATEGORY && !store.has_category(id))
        .map(str::to_string)
        .collect();

    for id in &missing_metadata {
        log::warn!("Category '{}' has no display metadata, using its id", id);
    }
    for id in &missing_data {
        log::warn!("Category '{}' is configured but missing from the dataset", id);
    }

    CategoryReport {
        missing_metadata,
        missing_data,
    }
}

/// Categories offered for selection: "all" first, then dataset order.
/// Empty categories are skipped.
pub fn available_categories(store: &VocabularyStore) -> Vec<CategoryInfo> {
    std::iter::once(ALL_CATEGORY)
        .chain(store.category_ids())
        .filter(|id| store.category_count(id) > 0)
        .map(category_info)
        .collect()
}

/// Case-insensitive substring match on display names. A blank query matches everything.
pub fn search_categories(store: &VocabularyStore, query: &str) -> Vec<CategoryInfo> {
    let query = query.trim().to_lowercase();
    available_categories(store)
        .into_iter()
        .filter(|info| query.is_empty() || info.display_name.to_lowercase().contains(&query))
        .collect()
}
