//! A word entry is a pair <Dutch word, English translation>
//! plus optional tags and example sentences.
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleSentence {
    #[serde(rename = "dutch")]
    pub source_sentence: String,
    #[serde(rename = "english")]
    pub target_sentence: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "dutch")]
    pub source: String,
    #[serde(rename = "english")]
    pub target: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(rename = "difficulty", default, skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
}

impl WordEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            part_of_speech: None,
            difficulty_level: None,
            examples: Vec::new(),
        }
    }

    /// Both sides must carry text for the entry to be studied or quizzed.
    pub fn is_usable(&self) -> bool {
        !self.source.trim().is_empty() && !self.target.trim().is_empty()
    }
}
