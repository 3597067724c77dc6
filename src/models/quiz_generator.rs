//! Multiple-choice quiz generation.
//!
//! Every word of the category becomes one question, in random order. Each question
//! offers the correct answer plus up to two distractors taken from the same category,
//! topped up from the whole dataset when the category cannot supply enough distinct
//! answers. A question may end up with only two options when even the whole dataset
//! is too small.

use super::{ALL_CATEGORY, Direction, QuizQuestion, WordEntry, shuffle};
use crate::data::VocabularyStore;
use crate::error::{Result, VocabError};
use rand::Rng;

pub const MIN_QUIZ_WORDS: usize = 3;
pub const DISTRACTOR_COUNT: usize = 2;

pub struct QuizGenerator<'a> {
    store: &'a VocabularyStore,
}

impl<'a> QuizGenerator<'a> {
    pub fn new(store: &'a VocabularyStore) -> Self {
        Self { store }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        category_id: &str,
        direction: Direction,
        rng: &mut R,
    ) -> Result<Vec<QuizQuestion>> {
        if !self.store.is_loaded() {
            return Err(VocabError::StoreNotLoaded);
        }

        let words = self.store.words_in_category(category_id);
        if words.len() < MIN_QUIZ_WORDS {
            return Err(VocabError::InsufficientWords {
                category: category_id.to_string(),
                available: words.len(),
                required: MIN_QUIZ_WORDS,
            });
        }

        let order = shuffle::shuffled(&words, rng);
        let questions: Vec<QuizQuestion> = order
            .iter()
            .map(|word| self.build_question(word, &words, category_id, direction, rng))
            .collect();

        log::debug!(
            "Generated {} quiz questions for '{}' ({})",
            questions.len(),
            category_id,
            direction.label()
        );
        Ok(questions)
    }

    fn build_question<R: Rng + ?Sized>(
        &self,
        word: &WordEntry,
        category_words: &[WordEntry],
        category_id: &str,
        direction: Direction,
        rng: &mut R,
    ) -> QuizQuestion {
        let correct_answer = direction.answer_of(word).to_string();

        let mut distractors =
            pick_distractors(category_words, direction, &correct_answer, &[], rng);

        if distractors.len() < DISTRACTOR_COUNT && category_id != ALL_CATEGORY {
            let everything = self.store.words_in_category(ALL_CATEGORY);
            let missing = DISTRACTOR_COUNT - distractors.len();
            let extra =
                pick_distractors(&everything, direction, &correct_answer, &distractors, rng);
            distractors.extend(extra.into_iter().take(missing));
        }

        let mut options = Vec::with_capacity(1 + distractors.len());
        options.push(correct_answer.clone());
        options.extend(distractors);
        shuffle::shuffle(&mut options, rng);

        QuizQuestion {
            prompt: direction.prompt_of(word).to_string(),
            correct_answer,
            options,
        }
    }
}

/// Up to `DISTRACTOR_COUNT` distinct answers from `pool`, none equal to `correct` or
/// already in `taken`.
fn pick_distractors<R: Rng + ?Sized>(
    pool: &[WordEntry],
    direction: Direction,
    correct: &str,
    taken: &[String],
    rng: &mut R,
) -> Vec<String> {
    let mut candidates: Vec<&str> = Vec::new();
    for answer in pool.iter().map(|w| direction.answer_of(w)) {
        if answer != correct && !taken.iter().any(|t| t == answer) && !candidates.contains(&answer)
        {
            candidates.push(answer);
        }
    }

    shuffle::shuffle(&mut candidates, rng);
    candidates
        .into_iter()
        .take(DISTRACTOR_COUNT)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn w(source: &str, target: &str) -> WordEntry {
        WordEntry::new(source, target)
    }

    fn store_of(categories: Vec<(&str, Vec<WordEntry>)>) -> VocabularyStore {
        let mut data = Dataset::new();
        for (id, words) in categories {
            data.insert(id.to_string(), words);
        }
        VocabularyStore::from_categories(data)
    }

    fn food_store() -> VocabularyStore {
        store_of(vec![(
            "food",
            vec![w("brood", "bread"), w("water", "water"), w("melk", "milk")],
        )])
    }

    fn assert_well_formed(question: &QuizQuestion) {
        let unique: HashSet<&String> = question.options.iter().collect();
        assert_eq!(unique.len(), question.options.len(), "duplicate options");
        assert_eq!(
            question
                .options
                .iter()
                .filter(|o| **o == question.correct_answer)
                .count(),
            1
        );
    }

    #[test]
    fn test_food_quiz_source_to_target() {
        let store = food_store();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let questions = QuizGenerator::new(&store)
            .generate("food", Direction::SourceToTarget, &mut rng)
            .unwrap();

        assert_eq!(questions.len(), 3);
        let pairs = [("brood", "bread"), ("water", "water"), ("melk", "milk")];
        let mut prompts = HashSet::new();
        for q in &questions {
            let (_, english) = pairs.iter().find(|(nl, _)| *nl == q.prompt).unwrap();
            assert_eq!(q.correct_answer, *english);
            assert_eq!(q.options.len(), 3);
            assert_well_formed(q);

            let mut expected: Vec<&str> = pairs.iter().map(|(_, en)| *en).collect();
            expected.sort();
            let mut options: Vec<&str> = q.options.iter().map(String::as_str).collect();
            options.sort();
            assert_eq!(options, expected);
            prompts.insert(q.prompt.clone());
        }
        assert_eq!(prompts.len(), 3);
    }

    #[test]
    fn test_target_to_source_prompts_english() {
        let store = food_store();
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let questions = QuizGenerator::new(&store)
            .generate("food", Direction::TargetToSource, &mut rng)
            .unwrap();

        for q in &questions {
            assert!(["bread", "water", "milk"].contains(&q.prompt.as_str()));
            assert!(["brood", "water", "melk"].contains(&q.correct_answer.as_str()));
            assert_well_formed(q);
        }
    }

    #[test]
    fn test_two_words_is_insufficient() {
        let store = store_of(vec![("food", vec![w("brood", "bread"), w("melk", "milk")])]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result =
            QuizGenerator::new(&store).generate("food", Direction::SourceToTarget, &mut rng);
        match result {
            Err(VocabError::InsufficientWords {
                available,
                required,
                ..
            }) => {
                assert_eq!(available, 2);
                assert_eq!(required, MIN_QUIZ_WORDS);
            }
            _ => panic!("expected InsufficientWords"),
        }
    }

    #[test]
    fn test_unknown_category_is_insufficient() {
        let store = food_store();
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(matches!(
            QuizGenerator::new(&store).generate("animals", Direction::SourceToTarget, &mut rng),
            Err(VocabError::InsufficientWords { available: 0, .. })
        ));
    }

    #[test]
    fn test_unloaded_store_is_rejected() {
        let store = VocabularyStore::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert!(matches!(
            QuizGenerator::new(&store).generate("food", Direction::SourceToTarget, &mut rng),
            Err(VocabError::StoreNotLoaded)
        ));
    }

    #[test]
    fn test_duplicate_answers_widen_to_all_categories() {
        // Two of three English answers collide, so the category alone offers one distractor.
        let store = store_of(vec![
            (
                "clothing",
                vec![w("shirt", "shirt"), w("hemd", "shirt"), w("jas", "coat")],
            ),
            ("weather", vec![w("zon", "sun"), w("regen", "rain"), w("wind", "wind")]),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(6);

        let questions = QuizGenerator::new(&store)
            .generate("clothing", Direction::SourceToTarget, &mut rng)
            .unwrap();

        assert_eq!(questions.len(), 3);
        for q in &questions {
            assert_eq!(q.options.len(), 3);
            assert_well_formed(q);
        }
        let coat = questions.iter().find(|q| q.correct_answer == "coat").unwrap();
        assert!(coat.options.contains(&"shirt".to_string()));
    }

    #[test]
    fn test_small_dataset_gives_two_options() {
        // Only two distinct English answers exist anywhere.
        let store = store_of(vec![(
            "clothing",
            vec![w("shirt", "shirt"), w("hemd", "shirt"), w("jas", "coat")],
        )]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let questions = QuizGenerator::new(&store)
            .generate("clothing", Direction::SourceToTarget, &mut rng)
            .unwrap();

        for q in &questions {
            assert_eq!(q.options.len(), 2);
            assert_well_formed(q);
        }
    }

    #[test]
    fn test_all_category_quiz_covers_every_word() {
        let store = store_of(vec![
            ("food", vec![w("brood", "bread"), w("melk", "milk"), w("kaas", "cheese")]),
            (
                "verbs",
                vec![
                    w("lopen", "to walk"),
                    w("eten", "to eat"),
                    w("slapen", "to sleep"),
                    w("drinken", "to drink"),
                ],
            ),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(8);

        let questions = QuizGenerator::new(&store)
            .generate(ALL_CATEGORY, Direction::TargetToSource, &mut rng)
            .unwrap();

        assert_eq!(questions.len(), 7);
        let prompts: HashSet<&str> = questions.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts.len(), 7);
        for q in &questions {
            assert_eq!(q.options.len(), 3);
            assert_well_formed(q);
        }
    }

    #[test]
    fn test_many_seeds_stay_well_formed() {
        let store = store_of(vec![
            (
                "food",
                vec![
                    w("brood", "bread"),
                    w("melk", "milk"),
                    w("kaas", "cheese"),
                    w("water", "water"),
                ],
            ),
            ("home", vec![w("huis", "house"), w("kamer", "room"), w("deur", "door")]),
        ]);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for direction in [Direction::SourceToTarget, Direction::TargetToSource] {
                for q in QuizGenerator::new(&store)
                    .generate("home", direction, &mut rng)
                    .unwrap()
                {
                    assert_eq!(q.options.len(), 3);
                    assert_well_formed(&q);
                }
            }
        }
    }
}
