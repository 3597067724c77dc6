//! Flashcard study session over one category.
//! Handles card navigation, reveal state, shuffling and the correct/incorrect tally.

use super::{Direction, WordEntry, shuffle};
use crate::data::VocabularyStore;
use crate::error::{Result, VocabError};
use rand::Rng;

/// One study run over a working copy of a category's words.
///
/// Navigation wraps around at both ends. Every move, shuffle or direction change hides
/// the back of the card again.
pub struct DeckSession {
    pub category_id: String,
    words: Vec<WordEntry>,
    position: usize,
    direction: Direction,
    is_revealed: bool,
    correct_count: usize,
    total_attempts: usize,
    pending_advance: bool,
}

impl DeckSession {
    /// Starts a session on `category_id`. Unknown categories give an empty deck.
    pub fn select_category(
        store: &VocabularyStore,
        category_id: &str,
        direction: Direction,
    ) -> Result<Self> {
        if !store.is_loaded() {
            return Err(VocabError::StoreNotLoaded);
        }

        let words = store.words_in_category(category_id);
        log::info!(
            "Starting study session for '{}' ({} cards, {})",
            category_id,
            words.len(),
            direction.label()
        );

        Ok(Self {
            category_id: category_id.to_string(),
            words,
            position: 0,
            direction,
            is_revealed: false,
            correct_count: 0,
            total_attempts: 0,
            pending_advance: false,
        })
    }

    pub fn words(&self) -> &[WordEntry] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn incorrect_count(&self) -> usize {
        self.total_attempts - self.correct_count
    }

    pub fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    pub fn has_pending_advance(&self) -> bool {
        self.pending_advance
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.words.get(self.position)
    }

    /// Text on the front of the current card.
    pub fn front_text(&self) -> Option<&str> {
        self.current_word().map(|w| self.direction.prompt_of(w))
    }

    /// Text on the back of the current card.
    pub fn back_text(&self) -> Option<&str> {
        self.current_word().map(|w| self.direction.answer_of(w))
    }

    /// `(position + 1) / len`, or 0 for an empty deck.
    pub fn progress_fraction(&self) -> f32 {
        if self.words.is_empty() {
            return 0.0;
        }
        (self.position + 1) as f32 / self.words.len() as f32
    }

    pub fn accuracy_percentage(&self) -> u32 {
        if self.total_attempts == 0 {
            return 0;
        }
        (self.correct_count as f64 / self.total_attempts as f64 * 100.0).round() as u32
    }

    /// Keeps the current card but hides its back.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.is_revealed = false;
        self.pending_advance = false;
    }

    pub fn toggle_direction(&mut self) {
        self.set_direction(self.direction.toggled());
    }

    /// Flips the current card. Returns false on an empty deck.
    pub fn toggle_reveal(&mut self) -> bool {
        if self.words.is_empty() {
            return false;
        }
        self.is_revealed = !self.is_revealed;
        true
    }

    /// Shows the back of the current card. Returns false if nothing changed.
    pub fn reveal(&mut self) -> bool {
        if self.words.is_empty() || self.is_revealed {
            return false;
        }
        self.is_revealed = true;
        true
    }

    /// Moves by `delta` cards, wrapping around either end.
    pub fn advance(&mut self, delta: isize) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let len = self.words.len() as isize;
        self.position = (self.position as isize + delta).rem_euclid(len) as usize;
        self.is_revealed = false;
        self.pending_advance = false;
        true
    }

    pub fn next(&mut self) -> bool {
        self.advance(1)
    }

    pub fn previous(&mut self) -> bool {
        self.advance(-1)
    }

    /// Reorders the working copy and restarts from the first card.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle::shuffle(&mut self.words, rng);
        self.position = 0;
        self.is_revealed = false;
        self.pending_advance = false;
    }

    /// Scores the revealed card and schedules a move to the next one.
    ///
    /// Ignored while the card is hidden or already scored. The move itself happens in
    /// `complete_pending_advance`, after the UI's feedback delay.
    pub fn record_answer(&mut self, is_correct: bool) -> bool {
        if !self.is_revealed || self.pending_advance {
            return false;
        }
        self.total_attempts += 1;
        if is_correct {
            self.correct_count += 1;
        }
        self.pending_advance = true;
        true
    }

    pub fn complete_pending_advance(&mut self) -> bool {
        if !self.pending_advance {
            return false;
        }
        self.advance(1)
    }
}
