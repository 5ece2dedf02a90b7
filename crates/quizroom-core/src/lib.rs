//! # Quizroom Core Library
//!
//! This library provides the core logic for Quizroom, a timed multiple-choice
//! quiz. All rendering lives outside the core: the terminal CLI (and any other
//! front end) drives the state machine and renders the events it returns.
//!
//! ## Architecture
//!
//! - **Question Bank**: ordered, immutable, validated questions
//! - **Countdown**: tick-driven, cancelable per-question timer with a
//!   wall-clock `Ticker` adapter
//! - **Quiz Machine**: owns the session and resolves every question exactly
//!   once, by answer or by timeout
//! - **Summary**: pure final-score classification
//!
//! ## Key Components
//!
//! - [`QuizMachine`]: Core quiz state machine
//! - [`CountdownTimer`]: Injectable countdown capability
//! - [`summarize`]: Percentage and performance tier
//! - [`Config`]: Application configuration management

pub mod bank;
pub mod config;
pub mod error;
pub mod events;
pub mod quiz;
pub mod summary;
pub mod timer;

pub use bank::{Question, QuestionBank};
pub use config::{Config, DisplayConfig, QuizConfig};
pub use error::{BankError, ConfigError, CoreError};
pub use events::Event;
pub use quiz::{AnswerState, QuizMachine, QuizPhase, QuizSession};
pub use summary::{summarize, Classification, ResultSummary};
pub use timer::{Clock, Countdown, CountdownSignal, CountdownTimer, ManualClock, MonotonicClock, Ticker};
