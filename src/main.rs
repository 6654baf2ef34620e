//! Countdown Letters - CLI
//!
//! Play the letters round on the console, solve boards, and simulate games.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use countdown_letters::{
    commands::{SimulationConfig, check_word, run_play, run_simulation, solve_letters},
    core::LetterTables,
    game::{GameConfig, Round},
    output::{print_check_result, print_simulation_result, print_solve_result},
    wordlists::{
        Dictionary,
        loader::{embedded, load_from_file, truncate},
    },
};
use env_logger::{Builder, Env};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "countdown",
    about = "The letters round of Countdown: pick tiles, find the longest word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the tile piles (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive console game (default)
    Play {
        /// Seconds allowed to enter a guess
        #[arg(short, long, default_value = "30")]
        time_limit: u64,
    },

    /// List every word that fits the given letters
    Solve {
        /// Letters on the board
        letters: String,

        /// Show at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Judge a single guess against the given letters
    Check {
        /// Letters on the board
        letters: String,

        /// Word to check
        word: String,
    },

    /// Reduce a word file to the words that fit on the board
    Truncate {
        /// Source word file
        input: PathBuf,

        /// Destination file (overwritten)
        output: PathBuf,

        /// Longest word to keep
        #[arg(short, long, default_value = "9")]
        max_len: usize,
    },

    /// Auto-play random rounds and report best word lengths
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        rounds: usize,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    match wordlist {
        "embedded" => Ok(embedded()),
        path => {
            load_from_file(path).with_context(|| format!("failed to read word list {path}"))
        }
    }
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { time_limit: 30 });

    match command {
        Commands::Play { time_limit } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_play_command(&dictionary, time_limit, cli.seed)
        }
        Commands::Solve { letters, limit } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let result = solve_letters(&letters, &dictionary, limit)?;
            print_solve_result(&result);
            Ok(())
        }
        Commands::Check { letters, word } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            let result = check_word(&letters, &word, &dictionary)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Truncate {
            input,
            output,
            max_len,
        } => {
            let summary = truncate(&input, &output, max_len)
                .with_context(|| format!("failed to truncate {}", input.display()))?;
            println!(
                "Kept {} of {} tokens, written to {}",
                summary.words_written,
                summary.tokens_read,
                output.display()
            );
            Ok(())
        }
        Commands::Simulate { rounds } => {
            let dictionary = load_dictionary(&cli.wordlist)?;
            run_simulate_command(&dictionary, rounds, cli.seed)
        }
    }
}

fn run_play_command(dictionary: &Dictionary, time_limit: u64, seed: Option<u64>) -> Result<()> {
    let config = GameConfig {
        time_limit: Duration::from_secs(time_limit),
        ..GameConfig::default()
    };
    let round = Round::new(config, &LetterTables::standard(), seed)?;
    run_play(round, dictionary)
}

fn run_simulate_command(dictionary: &Dictionary, rounds: usize, seed: Option<u64>) -> Result<()> {
    println!(
        "Simulating {rounds} rounds against {} words...",
        dictionary.len()
    );

    let options = SimulationConfig {
        rounds,
        seed,
        show_progress: true,
    };
    let result = run_simulation(
        dictionary,
        GameConfig::default(),
        &LetterTables::standard(),
        &options,
    )?;
    print_simulation_result(&result);
    Ok(())
}
