pub mod fallback;
pub mod source;
pub mod store;

use crate::models::WordEntry;
use indexmap::IndexMap;

/// Category id -> ordered words, in document order.
pub type Dataset = IndexMap<String, Vec<WordEntry>>;

pub use source::{DatasetSource, FileSource, HttpSource, source_for};
pub use store::{LoadOutcome, VocabularyStore};
