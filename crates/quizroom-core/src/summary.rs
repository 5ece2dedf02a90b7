//! Final score classification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Every question answered correctly.
    Perfect,
    /// At least half correct.
    Pass,
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub score: usize,
    pub total: usize,
    /// Wrong answers plus timed-out questions.
    pub incorrect: usize,
    /// `round(100 * score / total)`, halves rounded up.
    pub percentage: u8,
    pub classification: Classification,
}

/// Classify a final score. Pure: identical inputs give identical output.
///
/// `score` is clamped to `total`. A zero `total` yields 0% and is classified
/// by the same rules (so `0 / 0` counts as `Perfect`).
pub fn summarize(score: usize, total: usize) -> ResultSummary {
    let score = score.min(total);

    let percentage = if total == 0 {
        0
    } else {
        // Integer form of floor(100 * score / total + 0.5).
        ((200 * score + total) / (2 * total)) as u8
    };

    let classification = if score == total {
        Classification::Perfect
    } else if 2 * score >= total {
        Classification::Pass
    } else {
        Classification::Retry
    };

    ResultSummary {
        score,
        total,
        incorrect: total - score,
        percentage,
        classification,
    }
}
