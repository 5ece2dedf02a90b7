//! Interactive terminal quiz.
//!
//! A single task waits on either the next stdin line or the next clock poll;
//! each is handled to completion before the next is taken, so the machine
//! never sees two inputs at once.

use std::io::{self, Write};
use std::time::Duration;

use quizroom_core::{Config, Event, MonotonicClock, QuestionBank, QuizMachine, QuizPhase, Ticker};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render::Surface;

/// How often the clock is sampled. Ticks are still whole seconds.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Answer(usize),
    Next,
    Restart,
    Status,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if let Ok(index) = line.parse::<usize>() {
        return Command::Answer(index);
    }
    match line.to_ascii_lowercase().as_str() {
        "" | "n" | "next" => Command::Next,
        "r" | "restart" => Command::Restart,
        "s" | "status" => Command::Status,
        "q" | "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

struct Session<W: Write> {
    quiz: QuizMachine,
    surface: Surface<W>,
    ticker: Ticker<MonotonicClock>,
}

impl<W: Write> Session<W> {
    fn show(&mut self, events: impl IntoIterator<Item = Event>) -> io::Result<()> {
        for event in events {
            if matches!(event, Event::QuestionLoaded { .. }) {
                // Count the new countdown from the moment it is shown.
                self.ticker.reset();
            }
            self.surface.render(&event)?;
        }
        Ok(())
    }

    fn hint(&mut self) -> io::Result<()> {
        let text = match self.quiz.phase() {
            QuizPhase::Loading => "",
            QuizPhase::AwaitingAnswer => "answer with an option number (q to quit)",
            QuizPhase::Resolved => "press enter for the next question",
            QuizPhase::Finished => "r to restart, q to quit",
        };
        self.surface.line(text)
    }

    fn on_clock(&mut self) -> io::Result<()> {
        let was_resolved = self.quiz.answer_state().is_resolved();
        for _ in 0..self.ticker.poll() {
            let events = self.quiz.tick();
            self.show(events)?;
        }
        if !was_resolved && self.quiz.answer_state().is_resolved() {
            self.hint()?;
        }
        Ok(())
    }

    /// Returns false when the player quits.
    fn on_line(&mut self, line: &str) -> io::Result<bool> {
        match parse_command(line) {
            Command::Answer(index) => match self.quiz.submit_answer(index) {
                Some(event) => {
                    self.show([event])?;
                    self.hint()?;
                }
                None if self.quiz.phase() == QuizPhase::AwaitingAnswer => {
                    self.surface.line(&format!("no option {index}"))?;
                }
                None => self.hint()?,
            },
            Command::Next => match self.quiz.advance() {
                Some(event) => {
                    self.show([event])?;
                    self.hint()?;
                }
                None => self.hint()?,
            },
            Command::Restart => {
                let events = self.quiz.restart();
                self.show(events)?;
                self.hint()?;
            }
            Command::Status => {
                let snapshot = self.quiz.snapshot();
                self.surface.render(&snapshot)?;
            }
            Command::Quit => return Ok(false),
            Command::Unknown(other) => {
                self.surface.line(&format!("unknown input '{other}'"))?;
                self.hint()?;
            }
        }
        Ok(true)
    }
}

async fn run_loop<W: Write>(mut session: Session<W>) -> Result<(), Box<dyn std::error::Error>> {
    let events = session.quiz.restart();
    session.show(events)?;
    session.hint()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut interval = tokio::time::interval(POLL_INTERVAL);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => session.on_clock()?,
            line = lines.next_line() => match line? {
                Some(line) => {
                    if !session.on_line(&line)? {
                        break;
                    }
                }
                None => break,
            },
        }
    }

    tracing::info!(score = session.quiz.score(), "player left");
    Ok(())
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let session = Session {
        quiz: QuizMachine::new(QuestionBank::builtin(), config.quiz),
        surface: Surface::new(io::stdout(), config.display),
        ticker: Ticker::new(MonotonicClock::new()),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_loop(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizroom_core::{AnswerState, DisplayConfig, QuizConfig};

    fn session() -> Session<Vec<u8>> {
        Session {
            quiz: QuizMachine::new(QuestionBank::builtin(), QuizConfig::default()),
            surface: Surface::new(
                Vec::new(),
                DisplayConfig {
                    narrate: false,
                    confetti: false,
                    color: false,
                },
            ),
            ticker: Ticker::new(MonotonicClock::new()),
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_command(" 2 "), Command::Answer(2));
        assert_eq!(parse_command(""), Command::Next);
        assert_eq!(parse_command("NEXT"), Command::Next);
        assert_eq!(parse_command("r"), Command::Restart);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("s"), Command::Status);
        assert_eq!(parse_command("maybe"), Command::Unknown("maybe".into()));
    }

    #[test]
    fn lines_drive_the_quiz() {
        let mut s = session();
        let events = s.quiz.restart();
        s.show(events).unwrap();

        assert!(s.on_line("").unwrap());
        assert_eq!(s.quiz.current_index(), 0);

        assert!(s.on_line("1").unwrap());
        assert!(s.on_line("0").unwrap());
        assert_eq!(s.quiz.score(), 1);
        assert_eq!(s.quiz.answer_state(), AnswerState::Answered { selected: 1 });

        assert!(s.on_line("next").unwrap());
        assert_eq!(s.quiz.current_index(), 1);

        assert!(!s.on_line("quit").unwrap());

        let text = String::from_utf8(s.surface.into_inner()).unwrap();
        assert!(text.contains("press enter for the next question"));
        assert!(text.contains("question 2 / 5"));
    }

    #[test]
    fn unknown_option_is_reported() {
        let mut s = session();
        let events = s.quiz.restart();
        s.show(events).unwrap();
        s.on_line("7").unwrap();
        let text = String::from_utf8(s.surface.into_inner()).unwrap();
        assert!(text.contains("no option 7"));
    }

    #[test]
    fn clock_is_sampled_more_often_than_once_a_second() {
        assert!(POLL_INTERVAL < Duration::from_secs(1));
        assert_eq!(Duration::from_secs(1).as_millis() % POLL_INTERVAL.as_millis(), 0);
    }
}
