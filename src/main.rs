//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, with a TUI (default) or a line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;
use wordle_game::{
    commands::{run_simple, score_words},
    config::{Settings, load_settings, save_settings},
    game::Session,
    interactive::{App, run_tui},
    logging::{LogConfig, default_log_file, init_logging},
    oracle::{DictionaryService, FallbackOracle, RemoteDictionary, WordListOracle},
    output::{print_score_result, print_statistics},
    storage::{FileStore, MemoryStore, SnapshotStore},
    wordlists::{WordBank, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in the terminal: 5, 6 and 7 letter words, daily puzzles and statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length to play (5, 6 or 7); defaults to the saved or configured length
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Validate guesses against the built-in word lists only
    #[arg(long, global = true)]
    offline: bool,

    /// Save the game to this file instead of the default data directory
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Show statistics
    Stats,

    /// Write the current settings, with defaults filled in, to the settings file
    Config,

    /// Score a guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The hidden word
        target: String,
    },
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so it logs to a file
    let log_file = matches!(command, Commands::Play)
        .then(default_log_file)
        .flatten();
    init_logging(&LogConfig::from_verbosity(cli.verbose).with_log_file(log_file))
        .context("failed to initialize logging")?;

    let settings = load_settings();

    match command {
        Commands::Score { guess, target } => {
            let result = score_words(&guess, &target).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Config => {
            let path = save_settings(&settings).context("could not save settings")?;
            println!("Settings written to {}", path.display());
            Ok(())
        }
        Commands::Stats => {
            let session = load_session(&cli, &settings)?;
            print_statistics(session.statistics());
            Ok(())
        }
        Commands::Simple => {
            let mut session = load_session(&cli, &settings)?;
            let oracle = build_oracle(&cli, &settings);
            run_simple(&mut session, &oracle).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Play => {
            let session = load_session(&cli, &settings)?;
            let oracle = build_oracle(&cli, &settings);
            run_tui(App::new(session, Arc::new(oracle)))
        }
    }
}

fn open_store(cli: &Cli) -> Box<dyn SnapshotStore> {
    if let Some(path) = &cli.state_file {
        return Box::new(FileStore::new(path));
    }
    match FileStore::in_data_dir() {
        Ok(store) => Box::new(store),
        Err(e) => {
            warn!("{e}; this game will not be saved");
            Box::new(MemoryStore::new())
        }
    }
}

fn load_session(cli: &Cli, settings: &Settings) -> Result<Session> {
    let words = WordBank::new(settings.daily.epoch_date());
    let mut session = Session::load(
        Box::new(words),
        open_store(cli),
        settings.game.default_length,
    )
    .context("could not start a game")?;

    if let Some(length) = cli.length {
        session.switch_length(length)?;
    }
    Ok(session)
}

fn build_oracle(cli: &Cli, settings: &Settings) -> FallbackOracle {
    let mut words = WordListOracle::embedded();
    if let Some(path) = &settings.game.word_list {
        match load_from_file(path) {
            Ok(extra) => words.extend(extra),
            Err(e) => warn!("could not load word list {}: {e}", path.display()),
        }
    }

    if cli.offline || !settings.dictionary.enabled {
        return FallbackOracle::offline(words);
    }

    match RemoteDictionary::new(settings.dictionary.url.clone(), settings.dictionary.timeout()) {
        Ok(remote) => {
            let remote: Box<dyn DictionaryService> = Box::new(remote);
            FallbackOracle::new(Some(remote), words)
        }
        Err(e) => {
            warn!("dictionary client unavailable, using word lists: {e}");
            FallbackOracle::offline(words)
        }
    }
}
