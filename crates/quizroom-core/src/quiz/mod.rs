mod machine;
mod session;

pub use machine::QuizMachine;
pub use session::{AnswerState, QuizPhase, QuizSession};
