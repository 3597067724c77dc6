//! Drives a generated quiz: one answer per question, running score, final results.

use super::{Direction, QuizQuestion};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub incorrect: usize,
    pub percentage: u32,
}

pub struct QuizSession {
    pub category_id: String,
    pub direction: Direction,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    score: usize,
    selected_answer: Option<String>,
}

impl QuizSession {
    pub fn new(
        category_id: impl Into<String>,
        direction: Direction,
        questions: Vec<QuizQuestion>,
    ) -> Self {
        Self {
            category_id: category_id.into(),
            direction,
            questions,
            current_index: 0,
            score: 0,
            selected_answer: None,
        }
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// `None` once the results state is reached.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_index)
    }

    /// 1-based question number and total, for "3 / 10" counters.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        ((self.current_index + 1).min(total), total)
    }

    pub fn is_answered(&self) -> bool {
        self.selected_answer.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    /// Whether the answer given to the current question was right.
    pub fn last_answer_correct(&self) -> Option<bool> {
        let question = self.current_question()?;
        self.selected_answer
            .as_deref()
            .map(|selected| question.is_correct(selected))
    }

    /// Answers the current question. Returns whether it was correct, or `None` if the
    /// question was already answered or the quiz is over.
    pub fn answer(&mut self, selected: &str) -> Option<bool> {
        if self.selected_answer.is_some() {
            return None;
        }
        let is_correct = self.current_question()?.is_correct(selected);
        self.selected_answer = Some(selected.to_string());
        if is_correct {
            self.score += 1;
        }
        Some(is_correct)
    }

    /// Answers with the option at `index` (0-based).
    pub fn answer_by_index(&mut self, index: usize) -> Option<bool> {
        let option = self.current_question()?.options.get(index)?.clone();
        self.answer(&option)
    }

    /// Moves to the next question, or to the results state after the last one.
    /// Ignored until the current question is answered.
    pub fn next(&mut self) -> bool {
        if self.is_finished() || self.selected_answer.is_none() {
            return false;
        }
        self.current_index += 1;
        self.selected_answer = None;
        true
    }

    pub fn result_summary(&self) -> Option<QuizSummary> {
        if !self.is_finished() {
            return None;
        }
        let total = self.questions.len();
        let percentage = if total == 0 {
            0
        } else {
            (self.score as f64 / total as f64 * 100.0).round() as u32
        };
        Some(QuizSummary {
            score: self.score,
            total,
            incorrect: total - self.score,
            percentage,
        })
    }
}
