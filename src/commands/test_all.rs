//! Test all words - comprehensive solver evaluation
//!
//! Runs the solver against every dictionary word and generates statistics.

use super::benchmark::MISS_LIMIT;
use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Engine;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub wrong_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_wrong: f64,
    pub max_wrong: usize,
    pub worst_words: Vec<(String, usize)>,
}

/// Run the solver on all dictionary words (or a limited subset)
///
/// # Errors
///
/// Returns an error if any game fails to play out; every dictionary word
/// should resolve, so a failure here is a solver bug.
pub fn run_test_all(
    engine: &Engine<'_>,
    limit: Option<usize>,
) -> Result<TestAllStatistics, String> {
    let test_words: Vec<&Word> = engine
        .dictionary()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .collect();

    println!("🎯 Testing {} words...", test_words.len());

    // Progress bar
    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_err(|e| e.to_string())?
            .progress_chars("█▓▒░"),
    );

    let mut wrong_counts: Vec<(String, usize)> = Vec::new();
    let mut wrong_distribution: FxHashMap<usize, usize> = FxHashMap::default();

    let total_start = Instant::now();

    for (idx, &target) in test_words.iter().enumerate() {
        let config = SolveConfig::new(target.text().to_string());
        let result = solve_word(&config, engine)?;

        *wrong_distribution.entry(result.wrong_guesses).or_insert(0) += 1;
        wrong_counts.push((result.target, result.wrong_guesses));

        if idx % 50 == 0 && !wrong_counts.is_empty() {
            let avg = wrong_counts.iter().map(|(_, n)| n).sum::<usize>() as f64
                / wrong_counts.len() as f64;
            pb.set_message(format!("Avg wrong: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let total_words = wrong_counts.len();
    let wins = wrong_counts.iter().filter(|(_, n)| *n < MISS_LIMIT).count();
    let total_wrong: usize = wrong_counts.iter().map(|(_, n)| n).sum();
    let average_wrong = if total_words > 0 {
        total_wrong as f64 / total_words as f64
    } else {
        0.0
    };
    let max_wrong = wrong_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    let mut worst_words = wrong_counts;
    worst_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_words.truncate(10);

    Ok(TestAllStatistics {
        total_words,
        wins,
        losses: total_words - wins,
        wrong_distribution,
        total_time,
        average_wrong,
        max_wrong,
        worst_words,
    })
}

/// Print test-all statistics with formatting
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!(
        "  Won (< {} misses):    {} {}",
        MISS_LIMIT,
        stats.wins,
        format!(
            "({:.1}%)",
            stats.wins as f64 / stats.total_words as f64 * 100.0
        )
        .green()
    );
    if stats.losses > 0 {
        println!(
            "  Lost:                {} {}",
            stats.losses,
            format!(
                "({:.1}%)",
                stats.losses as f64 / stats.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average wrong:       {}",
        format!("{:.3}", stats.average_wrong).bright_yellow().bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per word:       {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );

    // Wrong-guess distribution
    println!("\n📈 {}", "Wrong-Guess Distribution".bright_cyan().bold());
    let max_count = *stats.wrong_distribution.values().max().unwrap_or(&1);
    let upper = stats.max_wrong.max(MISS_LIMIT);
    for wrong in 0..=upper {
        let count = stats.wrong_distribution.get(&wrong).unwrap_or(&0);
        let percentage = *count as f64 / stats.total_words as f64 * 100.0;
        let bar_len = if max_count > 0 {
            (*count * 40 / max_count).max(usize::from(*count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );

        println!("  {wrong:2} wrong: {bar} {count:4} ({percentage:5.1}%)");
    }

    // Hardest words
    if !stats.worst_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, wrong) in stats.worst_words.iter().take(5) {
            println!(
                "  {} ({} wrong guess{})",
                word.to_uppercase().yellow(),
                wrong,
                if *wrong == 1 { "" } else { "es" }
            );
        }
    }
}
