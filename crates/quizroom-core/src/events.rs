use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::quiz::{AnswerState, QuizPhase};
use crate::summary::Classification;

/// Every state change of a quiz produces an Event.
/// The presentation surface renders events; it never reads quiz internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    QuestionLoaded {
        run_id: Uuid,
        index: usize,
        prompt: String,
        options: Vec<String>,
        /// 1-based position, shown as `position / total`.
        position: usize,
        total: usize,
        total_time_secs: u32,
        at: DateTime<Utc>,
    },
    TimerTick {
        remaining_secs: u32,
        /// Remaining time is at or below the danger threshold.
        danger: bool,
        at: DateTime<Utc>,
    },
    /// A question was settled by an answer (`chosen_index` set) or by
    /// timeout (`chosen_index` is `None`).
    AnswerResolved {
        index: usize,
        chosen_index: Option<usize>,
        correct_index: usize,
        score_delta: u8,
        score: usize,
        at: DateTime<Utc>,
    },
    QuizFinished {
        run_id: Uuid,
        score: usize,
        total: usize,
        incorrect: usize,
        percentage: u8,
        classification: Classification,
        at: DateTime<Utc>,
    },
    QuizReset {
        run_id: Uuid,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        run_id: Uuid,
        phase: QuizPhase,
        index: usize,
        total: usize,
        score: usize,
        answer_state: AnswerState,
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
}
