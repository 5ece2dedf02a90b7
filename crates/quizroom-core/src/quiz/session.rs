use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::summary::ResultSummary;

/// Resolution of the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnswerState {
    Unanswered,
    Answered { selected: usize },
    TimedOut,
}

impl AnswerState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AnswerState::Unanswered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizPhase {
    /// No question presented yet in this run.
    Loading,
    AwaitingAnswer,
    Resolved,
    Finished,
}

/// Mutable state of one quiz run. Only [`super::QuizMachine`] mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub(super) run_id: Uuid,
    pub(super) current_index: usize,
    pub(super) score: usize,
    pub(super) answer_state: AnswerState,
    pub(super) time_remaining: u32,
    pub(super) question_loaded: bool,
    pub(super) result: Option<ResultSummary>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            current_index: 0,
            score: 0,
            answer_state: AnswerState::Unanswered,
            time_remaining: 0,
            question_loaded: false,
            result: None,
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answer_state(&self) -> AnswerState {
        self.answer_state
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Final summary, present once the run is finished.
    pub fn result(&self) -> Option<&ResultSummary> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> QuizPhase {
        if self.result.is_some() {
            QuizPhase::Finished
        } else if !self.question_loaded {
            QuizPhase::Loading
        } else if self.answer_state.is_resolved() {
            QuizPhase::Resolved
        } else {
            QuizPhase::AwaitingAnswer
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
