//! hangman CLI
//!
//! Play in the terminal, or drive a game headlessly from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use hangman::game::Game;
use hangman::logging::init_file_logging;
use hangman::report::format_report;
use hangman::tui;
use hangman::types::{DEFAULT_PHRASE, GameConfig, OutputFormat};

#[derive(Parser)]
#[command(name = "hangman")]
#[command(about = "Guess the phrase one letter at a time")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively in the terminal (default)
    Play {
        #[command(flatten)]
        phrase: PhraseArgs,

        /// Write debug logs to this file
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply a sequence of guesses and print the resulting game
    Guess {
        /// Letters to guess, in order (e.g. "etaoin")
        letters: String,

        #[command(flatten)]
        phrase: PhraseArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Args)]
struct PhraseArgs {
    /// Phrase to guess (upper-cased to match the A-Z keyboard)
    #[arg(long, default_value = DEFAULT_PHRASE)]
    phrase: String,
}

impl PhraseArgs {
    fn into_config(self, log_file: Option<PathBuf>) -> GameConfig {
        GameConfig {
            phrase: self.phrase,
            log_file,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_play(GameConfig::default()),
        Some(Commands::Play { phrase, log_file }) => cmd_play(phrase.into_config(log_file)),
        Some(Commands::Guess { letters, phrase, format }) => {
            cmd_guess(phrase.into_config(None), &letters, format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(config: GameConfig) -> Result<(), String> {
    if let Some(path) = &config.log_file {
        init_file_logging(path)
            .map_err(|e| format!("Cannot open log file {}: {}", path.display(), e))?;
    }

    let phrase = config.phrase().map_err(|e| e.to_string())?;
    info!(letters = phrase.len(), "starting game");

    tui::run(Game::new(phrase)).map_err(|e| format!("Terminal error: {}", e))
}

fn cmd_guess(config: GameConfig, letters: &str, format: OutputFormat) -> Result<(), String> {
    let phrase = config.phrase().map_err(|e| e.to_string())?;
    let mut game = Game::new(phrase);

    game.guess_typed(letters);

    print!("{}", format_report(&game, format));
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
