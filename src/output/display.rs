//! Display functions for command results

use super::formatters::{score_bar, spaced_pattern};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let mut wrong = 0;
    for (i, step) in result.steps.iter().enumerate() {
        if !step.correct {
            wrong += 1;
        }
        let mark = if step.correct {
            "✓".green()
        } else {
            "✗".red()
        };
        println!(
            "Turn {:2}: guess {} {}  {}",
            i + 1,
            step.guess.to_uppercase().bold(),
            mark,
            spaced_pattern(&step.pattern)
        );

        if verbose {
            println!("         {:6} words, {:2} wrong so far", step.candidates, wrong);
            if let Some(score) = step.score {
                println!("         score {score:.3}");
            }
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Solved with {} wrong guesses", result.wrong_guesses)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Unsolved after {} turns", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of position analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "POSITION ANALYSIS:".bright_cyan().bold(),
        spaced_pattern(&result.pattern).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.excluded.is_empty() {
        println!("\n📊 {} candidate words, no wrong letters yet", result.total_candidates);
    } else {
        println!(
            "\n📊 {} candidate words, wrong so far: {}",
            result.total_candidates,
            result.excluded.to_uppercase().red()
        );
    }

    println!(
        "\n   Best letter: {}\n",
        result.best.to_uppercase().to_string().bright_green().bold()
    );

    let best_score = result.scores.first().map_or(0.0, |s| s.score);
    for score in result.scores.iter().take(10) {
        let bar = score_bar(score.score, best_score, 30);
        println!(
            "   {}  [{}] {:8.3}  ({} words)",
            (score.letter as char).to_uppercase(),
            bar.green(),
            score.score,
            score.matching
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average wrong:    {}",
        format!("{:.2}", result.average_wrong).bright_yellow().bold()
    );
    println!(
        "   Win rate:         {}",
        format!(
            "{:.1}%",
            result.wins as f64 / result.total_words as f64 * 100.0
        )
        .green()
    );
    println!(
        "   Best case:        {}",
        format!("{} wrong", result.min_wrong).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{} wrong", result.max_wrong).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for wrong in 0..=result.max_wrong {
        if let Some(&count) = result.distribution.get(&wrong) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {wrong:2}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
