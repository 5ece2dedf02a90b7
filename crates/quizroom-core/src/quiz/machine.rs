//! Quiz progression state machine.
//!
//! The machine owns one [`QuizSession`] and one countdown. It never renders:
//! every transition returns the events the presentation surface should show.
//! Requests that are not valid in the current phase are ignored (no state
//! change, no event), since duplicate clicks and late timer ticks are normal
//! for user-driven input.
//!
//! ## State Transitions
//!
//! ```text
//! Loading -> AwaitingAnswer -> Resolved -> (AwaitingAnswer | Finished)
//! Finished -> (restart) -> AwaitingAnswer
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let mut quiz = QuizMachine::new(QuestionBank::builtin(), QuizConfig::default());
//! quiz.start();
//! // Once per second:
//! for event in quiz.tick() { /* render */ }
//! // On click:
//! quiz.submit_answer(1);
//! quiz.advance();
//! ```

use chrono::Utc;
use tracing::{debug, info};

use super::session::{AnswerState, QuizPhase, QuizSession};
use crate::bank::QuestionBank;
use crate::config::QuizConfig;
use crate::events::Event;
use crate::summary::{summarize, ResultSummary};
use crate::timer::{Countdown, CountdownSignal, CountdownTimer};

#[derive(Debug, Clone)]
pub struct QuizMachine<T: CountdownTimer = Countdown> {
    bank: QuestionBank,
    settings: QuizConfig,
    session: QuizSession,
    timer: T,
}

impl QuizMachine<Countdown> {
    pub fn new(bank: QuestionBank, settings: QuizConfig) -> Self {
        Self::with_timer(bank, settings, Countdown::new())
    }
}

impl<T: CountdownTimer> QuizMachine<T> {
    /// Create a machine around an injected countdown implementation.
    pub fn with_timer(bank: QuestionBank, settings: QuizConfig, mut timer: T) -> Self {
        timer.cancel();
        Self {
            bank,
            settings,
            session: QuizSession::new(),
            timer,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn phase(&self) -> QuizPhase {
        self.session.phase()
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn score(&self) -> usize {
        self.session.score
    }

    pub fn answer_state(&self) -> AnswerState {
        self.session.answer_state
    }

    pub fn time_remaining(&self) -> u32 {
        self.session.time_remaining
    }

    pub fn result(&self) -> Option<&ResultSummary> {
        self.session.result.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == QuizPhase::Finished
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            run_id: self.session.run_id,
            phase: self.phase(),
            index: self.session.current_index,
            total: self.bank.len(),
            score: self.session.score,
            answer_state: self.session.answer_state,
            remaining_secs: self.session.time_remaining,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Present the first question of a fresh run.
    pub fn start(&mut self) -> Option<Event> {
        self.load(0)
    }

    /// Present the question at `index` with a fresh answer state and countdown.
    ///
    /// Questions only move forward: once a run has started, a load must follow
    /// a resolved question and target a later index, so nothing is re-offered
    /// and no unanswered question is skipped. Loads while a question awaits
    /// its answer, loads of the current or an earlier index, loads after the
    /// run finished, and out-of-range indices are all ignored.
    pub fn load(&mut self, index: usize) -> Option<Event> {
        match self.phase() {
            QuizPhase::Loading => {}
            QuizPhase::Resolved if index > self.session.current_index => {}
            phase => {
                debug!(index, ?phase, "load ignored");
                return None;
            }
        }
        let Ok(question) = self.bank.get(index) else {
            debug!(index, total = self.bank.len(), "load ignored: index out of range");
            return None;
        };

        let duration = self.settings.question_time_secs;
        self.session.current_index = index;
        self.session.answer_state = AnswerState::Unanswered;
        self.session.question_loaded = true;
        self.session.time_remaining = duration;
        self.timer.start(duration);

        info!(index, prompt = question.prompt(), "loaded question");

        Some(Event::QuestionLoaded {
            run_id: self.session.run_id,
            index,
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            position: index + 1,
            total: self.bank.len(),
            total_time_secs: duration,
            at: Utc::now(),
        })
    }

    /// Resolve the current question with the user's choice. Scores at most
    /// once per question; later clicks are ignored.
    pub fn submit_answer(&mut self, selected: usize) -> Option<Event> {
        if self.phase() != QuizPhase::AwaitingAnswer {
            debug!(selected, phase = ?self.phase(), "answer ignored");
            return None;
        }
        let index = self.session.current_index;
        let Ok(question) = self.bank.get(index) else {
            return None;
        };
        if selected >= question.options().len() {
            debug!(selected, "answer ignored: no such option");
            return None;
        }

        self.timer.cancel();
        let correct_index = question.correct_index();
        let score_delta = u8::from(question.is_correct(selected));

        self.session.answer_state = AnswerState::Answered { selected };
        self.session.score += usize::from(score_delta);

        info!(index, selected, correct = score_delta == 1, score = self.session.score, "answer resolved");

        Some(Event::AnswerResolved {
            index,
            chosen_index: Some(selected),
            correct_index,
            score_delta,
            score: self.session.score,
            at: Utc::now(),
        })
    }

    /// Resolve the current question as timed out. No points are awarded.
    pub fn on_timer_expire(&mut self) -> Option<Event> {
        if self.phase() != QuizPhase::AwaitingAnswer {
            debug!(phase = ?self.phase(), "expiry ignored");
            return None;
        }
        let index = self.session.current_index;
        let Ok(question) = self.bank.get(index) else {
            return None;
        };

        self.timer.cancel();
        self.session.answer_state = AnswerState::TimedOut;
        self.session.time_remaining = 0;

        info!(index, "question timed out");

        Some(Event::AnswerResolved {
            index,
            chosen_index: None,
            correct_index: question.correct_index(),
            score_delta: 0,
            score: self.session.score,
            at: Utc::now(),
        })
    }

    /// Account for one elapsed second.
    ///
    /// Returns a `TimerTick` while the countdown runs and, on the second it
    /// reaches zero, the timeout resolution as well.
    pub fn tick(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(signal) = self.timer.tick() else {
            return events;
        };

        let remaining = match signal {
            CountdownSignal::Tick { remaining } => remaining,
            CountdownSignal::Expired => 0,
        };
        self.session.time_remaining = remaining;
        debug!(remaining, "tick");

        events.push(Event::TimerTick {
            remaining_secs: remaining,
            danger: remaining <= self.settings.danger_threshold_secs,
            at: Utc::now(),
        });

        if signal == CountdownSignal::Expired {
            events.extend(self.on_timer_expire());
        }
        events
    }

    /// Move past a resolved question: load the next one or finish the run.
    pub fn advance(&mut self) -> Option<Event> {
        if self.phase() != QuizPhase::Resolved {
            debug!(phase = ?self.phase(), "advance ignored");
            return None;
        }
        self.timer.cancel();

        let next = self.session.current_index + 1;
        if next < self.bank.len() {
            return self.load(next);
        }
        self.finish()
    }

    /// Reset score and position and present the first question again.
    /// Valid from any phase.
    pub fn restart(&mut self) -> Vec<Event> {
        self.timer.cancel();
        self.session = QuizSession::new();

        info!(run_id = %self.session.run_id, "quiz reset");

        let mut events = vec![Event::QuizReset {
            run_id: self.session.run_id,
            at: Utc::now(),
        }];
        events.extend(self.load(0));
        events
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn finish(&mut self) -> Option<Event> {
        let total = self.bank.len();
        let summary = summarize(self.session.score, total);
        self.session.current_index = total;
        self.session.time_remaining = 0;

        info!(
            score = summary.score,
            total,
            percentage = summary.percentage,
            classification = ?summary.classification,
            "quiz finished"
        );

        let event = Event::QuizFinished {
            run_id: self.session.run_id,
            score: summary.score,
            total: summary.total,
            incorrect: summary.incorrect,
            percentage: summary.percentage,
            classification: summary.classification,
            at: Utc::now(),
        };
        self.session.result = Some(summary);
        Some(event)
    }
}
