//! Vocabulary bundled into the binary, used when the external dataset is unavailable.

use super::Dataset;
use crate::export::json::parse_dataset;

const EMBEDDED_VOCABULARY: &str = include_str!("../../data/vocabulary.json");

pub fn embedded_dataset() -> Dataset {
    match parse_dataset(EMBEDDED_VOCABULARY) {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("Embedded vocabulary is invalid: {}", e);
            Dataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::{ALL_CATEGORY, is_known_category};

    #[test]
    fn test_embedded_dataset_parses() {
        let dataset = embedded_dataset();
        assert!(!dataset.is_empty());
    }

    #[test]
    fn test_embedded_categories_have_metadata_and_quiz_size() {
        for (id, words) in embedded_dataset() {
            assert_ne!(id, ALL_CATEGORY);
            assert!(is_known_category(&id), "no metadata for '{}'", id);
            assert!(words.len() >= 3, "category '{}' too small for a quiz", id);
            assert!(words.iter().all(|w| w.is_usable()));
        }
    }
}
