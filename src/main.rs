//! Hangman Solver - CLI
//!
//! Plays the guessing side of Hangman: narrows a dictionary to the words
//! consistent with the revealed pattern and picks the next letter by
//! frequency or information entropy.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        analyze_pattern, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        solve_word, SolveConfig,
    },
    core::{LetterSet, Pattern, Word},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{Engine, FilterMode, Guess, Strategy, TurnState},
    wordlists::{WORDS, loader::load_from_file, loader::words_from_slice},
};
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman guessing engine using letter frequency and information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default), occurrence, entropy
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Filter mode: simple (default) or strict
    #[arg(short, long, global = true, default_value = "simple")]
    filter: String,

    /// Wordlist: 'embedded' (default) or path to a plain-text file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Minimum word length kept when loading the dictionary
    #[arg(short = 'm', long, global = true, default_value = "2")]
    min_length: usize,

    /// Emit the whole word once a single candidate remains
    #[arg(long, global = true)]
    short_circuit: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Simple,

    /// Suggest the next letter for a pattern and set of wrong letters
    Suggest {
        /// Revealed pattern, e.g. c__e (use '_' for blanks)
        pattern: String,

        /// Wrong letters so far, e.g. xqz
        #[arg(default_value = "")]
        excluded: String,
    },

    /// Play a specific target word to completion
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts and scores
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank every unguessed letter for a position
    Analyze {
        /// Revealed pattern, e.g. m___h
        pattern: String,

        /// Wrong letters so far
        #[arg(default_value = "")]
        excluded: String,
    },

    /// Benchmark solver performance on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// RNG seed for reproducible sampling
        #[arg(long, default_value = "0")]
        seed: u64,
    },

    /// Test solver on every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str, min_length: usize) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS, min_length)),
        path => load_from_file(path, min_length)
            .with_context(|| format!("Failed to load wordlist from {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist, cli.min_length)?;
    if dictionary.is_empty() {
        return Err(anyhow!("Dictionary is empty"));
    }

    let strategy = Strategy::from_name(&cli.strategy);
    let filter_mode = FilterMode::from_name(&cli.filter);
    let engine =
        Engine::new(&dictionary, strategy, filter_mode).with_short_circuit(cli.short_circuit);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&engine).map_err(|e| anyhow!(e)),
        Commands::Suggest { pattern, excluded } => run_suggest_command(&pattern, &excluded, &engine),
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word);
            let result = solve_word(&config, &engine).map_err(|e| anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { pattern, excluded } => {
            let result = analyze_pattern(&pattern, &excluded, &dictionary, strategy, filter_mode)
                .map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &engine, &dictionary)
        }
        Commands::TestAll { limit } => {
            let stats = run_test_all(&engine, limit).map_err(|e| anyhow!(e))?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_suggest_command(pattern: &str, excluded: &str, engine: &Engine<'_>) -> Result<()> {
    let pattern: Pattern = pattern.parse().map_err(|e: String| anyhow!(e))?;
    let excluded: LetterSet = excluded.parse().map_err(|e: String| anyhow!(e))?;

    let state = TurnState {
        pattern,
        excluded,
        candidates: None,
    };
    let turn = engine.suggest(&state)?;

    match turn.guess {
        Guess::Letter(letter) => println!("{}", letter as char),
        Guess::Word(word) => println!("{word}"),
    }
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    seed: u64,
    engine: &Engine<'_>,
    dictionary: &[Word],
) -> Result<()> {
    println!("Running benchmark on {count} random words (seed {seed})...");

    let mut rng = StdRng::seed_from_u64(seed);
    let targets: Vec<&Word> = dictionary.choose_multiple(&mut rng, count).collect();

    let result = run_benchmark(engine, &targets).map_err(|e| anyhow!(e))?;
    print_benchmark_result(&result);
    Ok(())
}
