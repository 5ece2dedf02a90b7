use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod render;

/// Used when `RUST_LOG` is unset. Covers both `quizroom` and `quizroom_core`.
const DEFAULT_LOG_FILTER: &str = "quizroom=warn";

#[derive(Parser)]
#[command(name = "quizroom", version, about = "Quizroom CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the quiz in the terminal
    Play,
    /// Run the quiz with scripted answers
    Simulate {
        /// Comma-separated option numbers; '-' lets a question time out
        #[arg(long, default_value = "")]
        answers: String,
        /// Override the per-question countdown in seconds
        #[arg(long)]
        time: Option<u32>,
        /// Output format for the emitted events
        #[arg(long, value_enum, default_value = "json")]
        format: commands::simulate::OutputFormat,
        /// Print only the final summary as JSON
        #[arg(long)]
        summary: bool,
    },
    /// List the built-in questions
    Questions {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Play => commands::play::run(),
        Commands::Simulate {
            answers,
            time,
            format,
            summary,
        } => commands::simulate::run(&answers, time, format, summary),
        Commands::Questions { json } => commands::questions::run(json),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_parses_and_names_the_crates() {
        let filter = EnvFilter::try_new(DEFAULT_LOG_FILTER).expect("valid directive");
        assert_eq!(filter.to_string(), "quizroom=warn");
    }
}
