pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod models;
pub mod speech;

pub use data::VocabularyStore;
pub use error::{DatasetError, Result, VocabError};
pub use models::{DeckSession, Direction, QuizGenerator, QuizQuestion, QuizSession, WordEntry};
