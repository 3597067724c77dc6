use super::WordEntry;
use std::str::FromStr;

/// Which side of a word pair is shown as the prompt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Dutch prompt, English answer.
    #[default]
    SourceToTarget,
    /// English prompt, Dutch answer.
    TargetToSource,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }

    /// The side the learner translates from.
    pub fn prompt_of(self, word: &WordEntry) -> &str {
        match self {
            Direction::SourceToTarget => &word.source,
            Direction::TargetToSource => &word.target,
        }
    }

    /// The side the learner must produce.
    pub fn answer_of(self, word: &WordEntry) -> &str {
        match self {
            Direction::SourceToTarget => &word.target,
            Direction::TargetToSource => &word.source,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::SourceToTarget => "Dutch to English",
            Direction::TargetToSource => "English to Dutch",
        }
    }

    pub fn indicator(self) -> &'static str {
        match self {
            Direction::SourceToTarget => "🇳🇱 → 🇬🇧",
            Direction::TargetToSource => "🇬🇧 → 🇳🇱",
        }
    }

    pub fn quiz_prompt(self) -> &'static str {
        match self {
            Direction::SourceToTarget => "What is the English word for:",
            Direction::TargetToSource => "What is the Dutch word for:",
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source-to-target" | "dutch-to-english" => Ok(Direction::SourceToTarget),
            "target-to-source" | "english-to-dutch" => Ok(Direction::TargetToSource),
            other => Err(format!("unknown direction '{}'", other)),
        }
    }
}
