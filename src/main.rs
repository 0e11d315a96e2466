//! Word Grid - CLI
//!
//! Daily word-placement puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use wordgrid::{
    commands::{check_words, load_daily, run_simple, run_sweep},
    config::{DATA_DIR_ENV, GameConfig, resolve_data_dir},
    dictionary::{WordChecker, WordList},
    engine::{Session, generate},
    output::{print_check_results, print_daily, print_scores, print_sweep_result},
    storage::{FileStore, HighScoreStore},
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Daily word-placement puzzle: spell words across and down a 7x7 board",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle date as YYYY-MM-DD (default: today)
    #[arg(short, long, global = true, value_parser = parse_date)]
    date: Option<NaiveDate>,

    /// Newline-separated word file to use instead of the built-in list
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Directory for saved high scores
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented game without TUI)
    Simple,

    /// Print the day's starting board and the words already on it
    Show,

    /// Check words against the dictionary
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print recorded best scores
    Scores,

    /// Generate consecutive daily boards and summarize them
    Sweep {
        /// Number of days to generate
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("'{s}' is not YYYY-MM-DD: {e}"))
}

/// Load the word list selected by `--dictionary`
fn load_dictionary(path: Option<&PathBuf>) -> Result<WordList> {
    match path {
        Some(path) => {
            let words = WordList::load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            info!("loaded {} words from {}", words.len(), path.display());
            Ok(words)
        }
        None => Ok(WordList::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let config = GameConfig::default();
    let checker = WordChecker::new(load_dictionary(cli.dictionary.as_ref())?);
    let data_dir = resolve_data_dir(cli.data_dir);
    let store = HighScoreStore::new(FileStore::new(data_dir.clone()));
    info!("puzzle date {date}, data dir {}", data_dir.display());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(date, &config, &checker, store),
        Commands::Simple => run_simple_command(date, &config, &checker, store),
        Commands::Show => {
            let puzzle = load_daily(date, &config, &checker, store.get(date))?;
            print_daily(&puzzle);
            Ok(())
        }
        Commands::Check { words } => {
            print_check_results(&check_words(&words, &checker));
            Ok(())
        }
        Commands::Scores => {
            print_scores(&store.records());
            Ok(())
        }
        Commands::Sweep { days } => {
            println!("Generating {days} daily boards from {date}...");
            let result = run_sweep(date, days, &config, &checker, true)?;
            print_sweep_result(&result);
            Ok(())
        }
    }
}

fn run_simple_command(
    date: NaiveDate,
    config: &GameConfig,
    checker: &WordChecker<WordList>,
    mut store: HighScoreStore<FileStore>,
) -> Result<()> {
    let grid = generate(date, config)?;
    let mut session = Session::new(date, grid, checker).display_limit(config.display_limit);
    run_simple(&mut session, &mut store).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(
    date: NaiveDate,
    config: &GameConfig,
    checker: &WordChecker<WordList>,
    store: HighScoreStore<FileStore>,
) -> Result<()> {
    use wordgrid::interactive::{App, run_tui};

    let grid = generate(date, config)?;
    let session = Session::new(date, grid, checker).display_limit(config.display_limit);
    run_tui(App::new(session, store))
}
