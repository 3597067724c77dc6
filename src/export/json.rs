//! JSON reading and writing for vocabulary datasets.
//! The document is an object keyed by category id, each value a list of word entries.

use crate::data::{Dataset, VocabularyStore};
use crate::error::DatasetError;
use crate::models::ALL_CATEGORY;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Parses a dataset document, keeping the category order of the document.
pub fn parse_dataset(text: &str) -> Result<Dataset, DatasetError> {
    Ok(serde_json::from_str(text)?)
}

/// Writes one category as a dataset document, so the file can be loaded back as an
/// external vocabulary source. Exporting "all" writes every category under its own id.
pub fn export_category_to_path(
    store: &VocabularyStore,
    category_id: &str,
    path: impl AsRef<Path>,
) -> Result<usize, DatasetError> {
    let mut document = Dataset::new();
    if category_id == ALL_CATEGORY {
        for id in store.category_ids() {
            document.insert(id.to_string(), store.words_in_category(id));
        }
    } else {
        document.insert(category_id.to_string(), store.words_in_category(category_id));
    }
    let count: usize = document.values().map(Vec::len).sum();

    let json_string = serde_json::to_string_pretty(&document)?;
    let mut file = File::create(path.as_ref())?;
    file.write_all(json_string.as_bytes())?;

    log::info!(
        "Category '{}' exported to '{}' ({} words)",
        category_id,
        path.as_ref().display(),
        count
    );
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FileSource;
    use crate::models::WordEntry;

    fn create_test_store() -> VocabularyStore {
        let mut data = Dataset::new();
        data.insert(
            "food".to_string(),
            vec![WordEntry::new("brood", "bread"), WordEntry::new("melk", "milk")],
        );
        data.insert("verbs".to_string(), vec![WordEntry::new("lopen", "to walk")]);
        VocabularyStore::from_categories(data)
    }

    #[test]
    fn test_parse_keeps_document_order() {
        let json = r#"{ "verbs": [], "food": [], "home": [] }"#;
        let dataset = parse_dataset(json).unwrap();

        let ids: Vec<&str> = dataset.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["verbs", "food", "home"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_dataset("{ this is not valid json }"),
            Err(DatasetError::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert!(parse_dataset(r#"{ "food": [ { "dutch": "brood" } ] }"#).is_err());
    }

    #[test]
    fn test_export_category_to_path() {
        let store = create_test_store();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("food.json");

        let count = export_category_to_path(&store, "food", &path).unwrap();
        assert_eq!(count, 2);

        let text = std::fs::read_to_string(&path).unwrap();
        let dataset = parse_dataset(&text).unwrap();
        assert_eq!(dataset["food"][1].target, "milk");
    }

    #[test]
    fn test_export_all_keeps_categories() {
        let store = create_test_store();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("all.json");

        let count = export_category_to_path(&store, ALL_CATEGORY, &path).unwrap();
        assert_eq!(count, 3);

        let mut reloaded = VocabularyStore::new();
        assert!(!reloaded.load(&FileSource::new(&path)).is_fallback());
        assert_eq!(reloaded.category_ids().collect::<Vec<_>>(), vec!["food", "verbs"]);
        assert_eq!(reloaded.category_count(ALL_CATEGORY), 3);
    }

    #[test]
    fn test_exported_category_loads_back() {
        let store = create_test_store();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verbs.json");
        export_category_to_path(&store, "verbs", &path).unwrap();

        let mut reloaded = VocabularyStore::new();
        assert!(!reloaded.load(&FileSource::new(&path)).is_fallback());
        assert_eq!(reloaded.words_in_category("verbs"), store.words_in_category("verbs"));
    }
}
