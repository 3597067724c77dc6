//! The loaded vocabulary: category id -> ordered word list.
//!
//! A store is created empty, loaded exactly once (external source with fallback to the
//! embedded dataset) and read-only afterwards. Sessions borrow it instead of reaching
//! for global state.

use super::{Dataset, DatasetSource, fallback};
use crate::error::DatasetError;
use crate::export::json::parse_dataset;
use crate::models::{ALL_CATEGORY, WordEntry};

/// How the store got its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The external source was fetched and parsed.
    External,
    /// The external source failed; the bundled dataset is in use.
    Embedded { reason: String },
    /// Built directly from in-memory categories.
    Preloaded,
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Embedded { .. })
    }
}

#[derive(Default)]
pub struct VocabularyStore {
    categories: Dataset,
    outcome: Option<LoadOutcome>,
}

impl VocabularyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an already-loaded store. Unusable entries are dropped as in `load`.
    pub fn from_categories(categories: Dataset) -> Self {
        Self {
            categories: sanitize(categories),
            outcome: Some(LoadOutcome::Preloaded),
        }
    }

    /// Loads the dataset from `source`, falling back to the embedded dataset on any
    /// failure. Never fails. Calling it again on a loaded store changes nothing.
    pub fn load(&mut self, source: &dyn DatasetSource) -> LoadOutcome {
        if let Some(outcome) = &self.outcome {
            log::warn!("Vocabulary already loaded, ignoring reload from {}", source.describe());
            return outcome.clone();
        }

        let outcome = match fetch_dataset(source) {
            Ok(categories) => {
                log::info!(
                    "Loaded vocabulary from {} ({} categories)",
                    source.describe(),
                    categories.len()
                );
                self.categories = categories;
                LoadOutcome::External
            }
            Err(e) => {
                log::warn!(
                    "Could not load vocabulary from {}, using embedded data: {}",
                    source.describe(),
                    e
                );
                self.categories = sanitize(fallback::embedded_dataset());
                LoadOutcome::Embedded {
                    reason: e.to_string(),
                }
            }
        };

        self.outcome = Some(outcome.clone());
        outcome
    }

    pub fn is_loaded(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn load_outcome(&self) -> Option<&LoadOutcome> {
        self.outcome.as_ref()
    }

    /// Category ids in dataset order, excluding the "all" sentinel.
    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn has_category(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    /// A copy of the words in `id`; every category flattened in order for "all";
    /// empty for unknown ids.
    pub fn words_in_category(&self, id: &str) -> Vec<WordEntry> {
        if id == ALL_CATEGORY {
            return self.categories.values().flatten().cloned().collect();
        }
        self.categories.get(id).cloned().unwrap_or_default()
    }

    pub fn category_count(&self, id: &str) -> usize {
        if id == ALL_CATEGORY {
            return self.total_count();
        }
        self.categories.get(id).map_or(0, Vec::len)
    }

    pub fn total_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

fn fetch_dataset(source: &dyn DatasetSource) -> Result<Dataset, DatasetError> {
    let text = source.fetch()?;
    let categories = sanitize(parse_dataset(&text)?);
    if categories.values().all(Vec::is_empty) {
        return Err(DatasetError::Empty);
    }
    Ok(categories)
}

/// Drops entries with a blank side. Categories left empty are kept.
fn sanitize(mut categories: Dataset) -> Dataset {
    for (id, words) in categories.iter_mut() {
        let before = words.len();
        words.retain(WordEntry::is_usable);
        let dropped = before - words.len();
        if dropped > 0 {
            log::warn!("Dropped {} incomplete entries from category '{}'", dropped, id);
        }
    }
    // "all" is computed, never stored.
    if categories.shift_remove(ALL_CATEGORY).is_some() {
        log::warn!("Ignoring dataset category named '{}'", ALL_CATEGORY);
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use std::cell::Cell;

    struct StaticSource {
        body: Result<&'static str, u16>,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn ok(body: &'static str) -> Self {
            Self {
                body: Ok(body),
                calls: Cell::new(0),
            }
        }

        fn status(code: u16) -> Self {
            Self {
                body: Err(code),
                calls: Cell::new(0),
            }
        }
    }

    impl DatasetSource for StaticSource {
        fn describe(&self) -> String {
            "test source".to_string()
        }

        fn fetch(&self) -> Result<String, DatasetError> {
            self.calls.set(self.calls.get() + 1);
            match self.body {
                Ok(body) => Ok(body.to_string()),
                Err(code) => Err(DatasetError::HttpStatus(code)),
            }
        }
    }

    const SMALL: &str = r#"{
        "food": [
            { "dutch": "brood", "english": "bread" },
            { "dutch": "water", "english": "water" },
            { "dutch": "melk", "english": "milk" }
        ],
        "verbs": [
            { "dutch": "lopen", "english": "to walk" },
            { "dutch": "", "english": "to be" }
        ]
    }"#;

    #[test]
    fn test_new_store_is_not_loaded() {
        let store = VocabularyStore::new();
        assert!(!store.is_loaded());
        assert_eq!(store.total_count(), 0);
    }

    #[test]
    fn test_load_external() {
        let mut store = VocabularyStore::new();
        let outcome = store.load(&StaticSource::ok(SMALL));

        assert_eq!(outcome, LoadOutcome::External);
        assert!(store.is_loaded());
        assert_eq!(store.category_ids().collect::<Vec<_>>(), vec!["food", "verbs"]);
        // The entry with a blank Dutch side is dropped.
        assert_eq!(store.category_count("verbs"), 1);
        assert_eq!(store.category_count(ALL_CATEGORY), 4);
    }

    #[test]
    fn test_failed_fetch_falls_back() {
        let mut store = VocabularyStore::new();
        let outcome = store.load(&StaticSource::status(404));

        assert!(outcome.is_fallback());
        assert!(store.is_loaded());
        assert!(store.total_count() > 0);
    }

    #[test]
    fn test_malformed_json_falls_back() {
        let mut store = VocabularyStore::new();
        let outcome = store.load(&StaticSource::ok("{ this is not valid json }"));

        assert!(outcome.is_fallback());
        assert!(store.has_category("food"));
    }

    #[test]
    fn test_empty_document_falls_back() {
        let mut store = VocabularyStore::new();
        assert!(store.load(&StaticSource::ok("{}")).is_fallback());
    }

    #[test]
    fn test_only_blank_entries_falls_back() {
        let mut store = VocabularyStore::new();
        let outcome = store.load(&StaticSource::ok(
            r#"{"food":[{"dutch":"","english":"bread"},{"dutch":"melk","english":"  "}]}"#,
        ));

        assert!(outcome.is_fallback());
        assert!(store.total_count() > 0);
    }

    #[test]
    fn test_second_load_is_ignored() {
        let mut store = VocabularyStore::new();
        store.load(&StaticSource::ok(SMALL));

        let second = StaticSource::status(500);
        assert_eq!(store.load(&second), LoadOutcome::External);
        assert_eq!(second.calls.get(), 0);
        assert_eq!(store.category_count("food"), 3);
    }

    #[test]
    fn test_words_in_category_returns_copy() {
        let mut store = VocabularyStore::new();
        store.load(&StaticSource::ok(SMALL));

        let mut words = store.words_in_category("food");
        words.clear();
        assert_eq!(store.words_in_category("food").len(), 3);
    }

    #[test]
    fn test_all_flattens_in_dataset_order() {
        let mut store = VocabularyStore::new();
        store.load(&StaticSource::ok(SMALL));

        let sources: Vec<String> = store
            .words_in_category(ALL_CATEGORY)
            .into_iter()
            .map(|w| w.source)
            .collect();
        assert_eq!(sources, vec!["brood", "water", "melk", "lopen"]);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let store = VocabularyStore::from_categories(IndexMap::new());
        assert!(store.words_in_category("animals").is_empty());
        assert_eq!(store.category_count("animals"), 0);
    }

    #[test]
    fn test_stored_all_category_is_ignored() {
        let mut data = IndexMap::new();
        data.insert(ALL_CATEGORY.to_string(), vec![WordEntry::new("ja", "yes")]);
        data.insert("food".to_string(), vec![WordEntry::new("brood", "bread")]);

        let store = VocabularyStore::from_categories(data);
        assert_eq!(store.category_count(ALL_CATEGORY), 1);
        assert!(!store.has_category(ALL_CATEGORY));
    }
}
