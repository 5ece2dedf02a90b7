//! Ordered, immutable question bank.

mod question;

pub use question::Question;

use serde::Serialize;

use crate::error::BankError;

#[derive(Debug, Clone, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from an ordered list. An empty list is rejected.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self { questions })
    }

    /// The five web-development questions shipped with the quiz.
    pub fn builtin() -> Self {
        // The literals below always satisfy Question::new.
        let q = |prompt: &str, options: [&str; 4], correct: usize| Question {
            prompt: prompt.into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            correct_index: correct,
        };
        Self {
            questions: vec![
                q(
                    "Which language is primarily used to style web pages?",
                    ["HTML", "CSS", "Java", "C"],
                    1,
                ),
                q(
                    "Which of the following is NOT a JavaScript data type?",
                    ["Number", "Boolean", "Character", "Undefined"],
                    2,
                ),
                q(
                    "Which method is used to print something in the browser console?",
                    ["print()", "console.print()", "console.log()", "log.console()"],
                    2,
                ),
                q(
                    "Which HTML tag is used to include JavaScript?",
                    ["<js>", "<javascript>", "<script>", "<code>"],
                    2,
                ),
                q(
                    "In CSS, which symbol is used to select a class?",
                    ["#", ".", "*", "&"],
                    1,
                ),
            ],
        }
    }

    pub fn get(&self, index: usize) -> Result<&Question, BankError> {
        self.questions.get(index).ok_or(BankError::OutOfRange {
            index,
            len: self.questions.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
