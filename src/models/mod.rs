pub mod category;
pub mod deck_session;
pub mod direction;
pub mod quiz_generator;
pub mod quiz_question;
pub mod quiz_session;
pub mod shuffle;
pub mod word_entry;

pub use category::{ALL_CATEGORY, CategoryInfo};
pub use deck_session::DeckSession;
pub use direction::Direction;
pub use quiz_generator::QuizGenerator;
pub use quiz_question::QuizQuestion;
pub use quiz_session::{QuizSession, QuizSummary};
pub use word_entry::{ExampleSentence, WordEntry};
