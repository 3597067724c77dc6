/// One multiple-choice question: the prompt word, its translation and the shuffled options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub correct_answer: String,
    pub options: Vec<String>,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
