use serde::Serialize;

use crate::error::BankError;

/// A single multiple-choice question.
///
/// Fields are private to the bank so the `correct_index < options.len()` invariant
/// established by [`Question::new`] cannot be broken afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub(super) prompt: String,
    pub(super) options: Vec<String>,
    pub(super) correct_index: usize,
}

impl Question {
    pub fn new<P, I, S>(prompt: P, options: I, correct_index: usize) -> Result<Self, BankError>
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let prompt = prompt.into();
        let options: Vec<String> = options.into_iter().map(Into::into).collect();

        if options.len() < 2 {
            return Err(BankError::TooFewOptions {
                prompt,
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(BankError::InvalidCorrectIndex {
                prompt,
                index: correct_index,
                count: options.len(),
            });
        }

        Ok(Self {
            prompt,
            options,
            correct_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}
