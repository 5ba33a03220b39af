//! Benchmark command
//!
//! Plays the solver against a sample of target words and reports the
//! wrong-guess distribution. The classic game allows six misses, so a word is
//! counted as a win when it resolves with fewer.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Engine;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Misses allowed before a game counts as lost
pub const MISS_LIMIT: usize = 6;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub total_wrong: usize,
    pub average_wrong: f64,
    pub min_wrong: usize,
    pub max_wrong: usize,
    /// Games resolved with fewer than [`MISS_LIMIT`] wrong guesses
    pub wins: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run the solver over a set of target words
///
/// # Errors
///
/// Returns an error if any target cannot be played (invalid word or a word
/// outside the engine's dictionary).
pub fn run_benchmark(engine: &Engine<'_>, targets: &[&Word]) -> Result<BenchmarkResult, String> {
    let start = Instant::now();
    let mut total_wrong = 0;
    let mut min_wrong = usize::MAX;
    let mut max_wrong = 0;
    let mut wins = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        let config = SolveConfig::new(target.text().to_string());
        let result = solve_word(&config, engine)?;

        total_wrong += result.wrong_guesses;
        min_wrong = min_wrong.min(result.wrong_guesses);
        max_wrong = max_wrong.max(result.wrong_guesses);
        if result.solved && result.wrong_guesses < MISS_LIMIT {
            wins += 1;
        }
        *distribution.entry(result.wrong_guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_words = targets.len();
    let average_wrong = if total_words > 0 {
        total_wrong as f64 / total_words as f64
    } else {
        0.0
    };
    let words_per_second = if total_words > 0 {
        total_words as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_words,
        total_wrong,
        average_wrong,
        min_wrong: if total_words == 0 { 0 } else { min_wrong },
        max_wrong,
        wins,
        distribution,
        duration,
        words_per_second,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FilterMode, Strategy};

    fn dict(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn benchmark_runs() {
        let words = dict(&["cat", "car", "can", "cap", "dog", "pig", "hen"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let targets: Vec<&Word> = words.iter().take(5).collect();

        let result = run_benchmark(&engine, &targets).unwrap();

        assert_eq!(result.total_words, 5);
        assert!(result.average_wrong >= 0.0);
        assert!(result.min_wrong <= result.max_wrong);
    }

    #[test]
    fn distribution_sums_to_total() {
        let words = dict(&["cat", "car", "can", "cap", "dog"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let targets: Vec<&Word> = words.iter().collect();

        let result = run_benchmark(&engine, &targets).unwrap();

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_words);
    }

    #[test]
    fn average_between_min_and_max() {
        let words = dict(&["march", "marsh", "match", "month", "mouth"]);
        let engine = Engine::new(&words, Strategy::Entropy, FilterMode::Simple);
        let targets: Vec<&Word> = words.iter().collect();

        let result = run_benchmark(&engine, &targets).unwrap();

        assert!(result.average_wrong >= result.min_wrong as f64);
        assert!(result.average_wrong <= result.max_wrong as f64);
    }

    #[test]
    fn empty_target_list() {
        let words = dict(&["cat"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);

        let result = run_benchmark(&engine, &[]).unwrap();

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_wrong, 0);
        assert_eq!(result.min_wrong, 0);
        assert_eq!(result.average_wrong, 0.0);
        assert!(result.words_per_second.is_finite());
    }

    #[test]
    fn unknown_target_propagates_error() {
        let words = dict(&["cat"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let outside = Word::new("zebra").unwrap();
        let targets = vec![&outside];

        assert!(run_benchmark(&engine, &targets).is_err());
    }
}
