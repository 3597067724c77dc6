//! Error types shared by the data layer and the study/quiz sessions.

use thiserror::Error;

/// Errors raised while fetching or parsing a vocabulary dataset.
///
/// These never escape `VocabularyStore::load`, which falls back to the embedded
/// dataset instead. They do reach callers of the export helpers.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Invalid vocabulary JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dataset contains no usable words")]
    Empty,
}

#[derive(Debug, Error)]
pub enum VocabError {
    #[error(
        "Category '{category}' needs at least {required} words to create a quiz (has {available})"
    )]
    InsufficientWords {
        category: String,
        available: usize,
        required: usize,
    },

    #[error("Vocabulary data not loaded yet")]
    StoreNotLoaded,

    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

pub type Result<T> = std::result::Result<T, VocabError>;
