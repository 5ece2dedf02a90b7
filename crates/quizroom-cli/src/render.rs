//! Terminal presentation surface.
//!
//! Turns quiz events into text: the question card, the answer reveal, the
//! scoreboard with its confetti burst, and the `dev@quiz:~$` narration lines.

use std::io::{self, Write};

use quizroom_core::{Classification, DisplayConfig, Event};
use rand::seq::SliceRandom;
use rand::Rng;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

const CONFETTI_COLORS: [&str; 5] = ["\x1b[32m", "\x1b[96m", "\x1b[93m", "\x1b[38;5;208m", "\x1b[91m"];
const CONFETTI_GLYPHS: [char; 6] = ['*', '+', '.', 'o', '~', '^'];
const CONFETTI_ROWS: usize = 3;
const CONFETTI_WIDTH: usize = 30;

pub fn performance_message(classification: Classification) -> &'static str {
    match classification {
        Classification::Perfect => "Perfect score. Ship it! 🚀",
        Classification::Pass => "Nice work. Keep committing code!",
        Classification::Retry => "It's fine, even senior devs Google stuff. Try again 😉",
    }
}

pub struct Surface<W: Write> {
    out: W,
    display: DisplayConfig,
    /// Options of the question on screen, for the answer reveal.
    options: Vec<String>,
}

impl<W: Write> Surface<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self {
            out,
            display,
            options: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(&mut self, event: &Event) -> io::Result<()> {
        match event {
            Event::QuestionLoaded {
                index,
                prompt,
                options,
                position,
                total,
                total_time_secs,
                ..
            } => {
                self.options = options.clone();
                let label = self.paint(DIM, "question");
                let clock = self.paint(CYAN, &format!("⏱ {total_time_secs}s"));
                let title = self.paint(BOLD, prompt);
                writeln!(self.out)?;
                writeln!(self.out, "{label} {position} / {total}  {clock}")?;
                writeln!(self.out, "{title}")?;
                for (i, option) in options.iter().enumerate() {
                    let key = self.paint(DIM, &format!("opt[{i}]"));
                    writeln!(self.out, "  {key} {option}")?;
                }
                self.narrate(&format!("loadedQuestion({index}) // \"{prompt}\""), false)?;
            }
            Event::TimerTick {
                remaining_secs,
                danger,
                ..
            } => {
                // Every tick would flood the terminal; show the ten-second marks
                // and the danger zone.
                if *danger || remaining_secs % 10 == 0 {
                    let color = if *danger { RED } else { CYAN };
                    let clock = self.paint(color, &format!("⏱ {remaining_secs}s"));
                    writeln!(self.out, "{clock}")?;
                }
            }
            Event::AnswerResolved {
                chosen_index,
                correct_index,
                score,
                ..
            } => {
                for (i, option) in self.options.iter().enumerate() {
                    let line = if i == *correct_index {
                        self.paint(GREEN, &format!("  ✔ opt[{i}] {option}"))
                    } else if Some(i) == *chosen_index {
                        self.paint(RED, &format!("  ✘ opt[{i}] {option}"))
                    } else {
                        self.paint(DIM, &format!("    opt[{i}] {option}"))
                    };
                    writeln!(self.out, "{line}")?;
                }
                match chosen_index {
                    Some(chosen) if chosen == correct_index => {
                        self.narrate("console.log(\"Correct ✅\")", false)?
                    }
                    Some(_) => self.narrate("console.error(\"Wrong ❌\")", true)?,
                    None => self.narrate("console.error(\"Time up ⏱ Unattempted\")", true)?,
                }
                writeln!(self.out, "score: {score}")?;
            }
            Event::QuizFinished {
                score,
                total,
                incorrect,
                percentage,
                classification,
                ..
            } => {
                self.options.clear();
                let heading = self.paint(BOLD, "Quiz Completed ✅");
                writeln!(self.out)?;
                writeln!(self.out, "{heading}")?;
                writeln!(self.out, "Scoreboard ready ✅  {score}/{total}  {percentage}%")?;
                writeln!(self.out, "{}", performance_message(*classification))?;
                writeln!(self.out, "correct: {score}  incorrect+unattempted: {incorrect}")?;
                if self.display.confetti {
                    self.confetti()?;
                }
                self.narrate(
                    &format!(
                        "quizFinished({{ score: {score}, total: {total}, percentage: {percentage} }})"
                    ),
                    false,
                )?;
            }
            Event::QuizReset { .. } => {
                self.options.clear();
                self.narrate("console.log(\"Quiz reset()\")", false)?;
            }
            Event::StateSnapshot { .. } => {
                writeln!(self.out, "{}", serde_json::to_string_pretty(event)?)?;
            }
        }
        self.out.flush()
    }

    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    fn narrate(&mut self, message: &str, error: bool) -> io::Result<()> {
        if !self.display.narrate {
            return Ok(());
        }
        let message = if error {
            self.paint(RED, message)
        } else {
            message.to_string()
        };
        let prefix = self.paint(GREEN, "dev@quiz:~$ ");
        writeln!(self.out, "{prefix}{message}")
    }

    fn confetti(&mut self) -> io::Result<()> {
        let mut rng = rand::thread_rng();
        for _ in 0..CONFETTI_ROWS {
            let mut row = String::new();
            for _ in 0..CONFETTI_WIDTH {
                if rng.gen_bool(0.35) {
                    row.push(' ');
                    continue;
                }
                let glyph = CONFETTI_GLYPHS.choose(&mut rng).copied().unwrap_or('*');
                if self.display.color {
                    let color = CONFETTI_COLORS.choose(&mut rng).copied().unwrap_or(YELLOW);
                    row.push_str(color);
                    row.push(glyph);
                    row.push_str(RESET);
                } else {
                    row.push(glyph);
                }
            }
            writeln!(self.out, "{row}")?;
        }
        self.narrate("console.log(\"Party mode: true 🧨\")", false)
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.display.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizroom_core::{QuestionBank, QuizConfig, QuizMachine};

    fn plain() -> DisplayConfig {
        DisplayConfig {
            narrate: true,
            confetti: false,
            color: false,
        }
    }

    fn rendered(events: &[Event], display: DisplayConfig) -> String {
        let mut surface = Surface::new(Vec::new(), display);
        for event in events {
            surface.render(event).unwrap();
        }
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn question_card_and_wrong_answer_reveal() {
        let mut quiz = QuizMachine::new(QuestionBank::builtin(), QuizConfig::default());
        let loaded = quiz.start().unwrap();
        let resolved = quiz.submit_answer(0).unwrap();

        let text = rendered(&[loaded, resolved], plain());
        assert!(text.contains("question 1 / 5"));
        assert!(text.contains("opt[1] CSS"));
        assert!(text.contains("✔ opt[1] CSS"));
        assert!(text.contains("✘ opt[0] HTML"));
        assert!(text.contains("dev@quiz:~$ console.error(\"Wrong ❌\")"));
        assert!(text.contains("dev@quiz:~$ loadedQuestion(0)"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn timeout_is_narrated_as_unattempted() {
        let mut quiz = QuizMachine::new(
            QuestionBank::builtin(),
            QuizConfig {
                question_time_secs: 1,
                danger_threshold_secs: 5,
            },
        );
        let mut events = vec![quiz.start().unwrap()];
        events.extend(quiz.tick());

        let text = rendered(&events, plain());
        assert!(text.contains("⏱ 0s"));
        assert!(text.contains("Time up ⏱ Unattempted"));
        assert!(!text.contains('✘'));
    }

    #[test]
    fn scoreboard_with_confetti() {
        let mut quiz = QuizMachine::new(QuestionBank::builtin(), QuizConfig::default());
        quiz.start();
        for (i, answer) in [1, 2, 0, 2, 1].into_iter().enumerate() {
            quiz.submit_answer(answer);
            if i < 4 {
                quiz.advance();
            }
        }
        let finished = quiz.advance().unwrap();

        let display = DisplayConfig {
            confetti: true,
            ..plain()
        };
        let text = rendered(&[finished], display);
        assert!(text.contains("4/5  80%"));
        assert!(text.contains("Nice work. Keep committing code!"));
        assert!(text.contains("incorrect+unattempted: 1"));
        assert!(text.contains("Party mode: true"));
        assert!(text.contains("quizFinished({ score: 4, total: 5, percentage: 80 })"));
    }

    #[test]
    fn narration_can_be_silenced() {
        let mut quiz = QuizMachine::new(QuestionBank::builtin(), QuizConfig::default());
        let events = quiz.restart();
        let display = DisplayConfig {
            narrate: false,
            ..plain()
        };
        let text = rendered(&events, display);
        assert!(!text.contains("dev@quiz"));
        assert!(text.contains("Which language is primarily used to style web pages?"));
    }

    #[test]
    fn messages_per_tier() {
        assert!(performance_message(Classification::Perfect).starts_with("Perfect score"));
        assert!(performance_message(Classification::Retry).contains("Try again"));
    }
}
