//! Scripted, non-interactive quiz run.
//!
//! Answers are given up front; `-` lets that question's countdown run out.
//! Questions without a scripted answer time out as well.

use std::io;

use clap::ValueEnum;
use quizroom_core::{Config, Event, QuestionBank, QuizConfig, QuizMachine};

use crate::render::Surface;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One JSON event per line
    Json,
    /// Terminal rendering
    Text,
}

/// Parse `1,2,-,2,1` into scripted answers.
pub fn parse_answers(raw: &str) -> Result<Vec<Option<usize>>, String> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(str::trim)
        .map(|part| match part {
            "-" => Ok(None),
            n => n
                .parse::<usize>()
                .map(Some)
                .map_err(|_| format!("invalid answer '{n}': expected an option number or '-'")),
        })
        .collect()
}

/// Drive a machine through the script and collect every emitted event.
pub fn play_script(
    quiz: &mut QuizMachine,
    answers: &[Option<usize>],
) -> Result<Vec<Event>, String> {
    let total = quiz.bank().len();
    if answers.len() > total {
        return Err(format!(
            "{} answers given but the quiz has {total} questions",
            answers.len()
        ));
    }

    let mut events: Vec<Event> = quiz.restart();
    for position in 0..total {
        match answers.get(position).copied().flatten() {
            Some(selected) => {
                let event = quiz.submit_answer(selected).ok_or_else(|| {
                    format!(
                        "answer {selected} is not an option for question {}",
                        position + 1
                    )
                })?;
                events.push(event);
            }
            None => {
                while !quiz.answer_state().is_resolved() {
                    let ticks = quiz.tick();
                    if ticks.is_empty() {
                        return Err(format!("question {} never timed out", position + 1));
                    }
                    events.extend(ticks);
                }
            }
        }
        events.extend(quiz.advance());
    }
    Ok(events)
}

pub fn run(
    answers: &str,
    time: Option<u32>,
    format: OutputFormat,
    summary: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let settings = QuizConfig {
        question_time_secs: time.unwrap_or(config.quiz.question_time_secs),
        ..config.quiz
    };

    let answers = parse_answers(answers)?;
    let mut quiz = QuizMachine::new(QuestionBank::builtin(), settings);
    let events = play_script(&mut quiz, &answers)?;

    if summary {
        let result = quiz.result().ok_or("quiz did not finish")?;
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            for event in &events {
                println!("{}", serde_json::to_string(event)?);
            }
        }
        OutputFormat::Text => {
            let mut surface = Surface::new(io::stdout().lock(), config.display);
            for event in &events {
                surface.render(event)?;
            }
        }
    }
    Ok(())
}
