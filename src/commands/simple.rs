//! Simple interactive CLI mode
//!
//! Text-based assistant: the user plays Hangman somewhere else and feeds the
//! evolving pattern and wrong letters here; the solver suggests letters.

use crate::core::{LetterSet, Pattern};
use crate::solver::{Engine, Guess, TurnState};
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(engine: &Engine<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║             Hangman Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each turn, enter the revealed pattern and the wrong letters so far.");
    println!("I'll suggest the next letter to try.\n");
    println!("  - Pattern: lowercase letters and '_' for blanks, e.g. c__e");
    println!("  - Wrong letters: a run of letters, e.g. xqz (or empty)\n");
    println!("Commands: 'quit' to exit\n");

    loop {
        let pattern_input = get_user_input("Pattern")?;
        match pattern_input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            _ => {}
        }

        let pattern: Pattern = match pattern_input.parse() {
            Ok(p) => p,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        if !pattern.is_unfinished() {
            println!("\n🎉 Pattern is complete: {pattern}\n");
            continue;
        }

        let excluded: LetterSet = match get_user_input("Wrong letters")?.parse() {
            Ok(set) => set,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let state = TurnState {
            pattern,
            excluded,
            candidates: None,
        };

        match engine.suggest(&state) {
            Ok(turn) => {
                println!("────────────────────────────────────────────────────────────");
                println!("{} candidates remaining", turn.candidates.len());

                match turn.guess {
                    Guess::Word(word) => {
                        println!("\n🎯 Only one word fits: {}\n", word.text().to_uppercase());
                    }
                    Guess::Letter(letter) => {
                        println!(
                            "\n📊 Suggested letter: {}",
                            (letter as char).to_uppercase()
                        );
                        if let Some(score) = turn.scores.iter().find(|s| s.letter == letter) {
                            println!(
                                "   Score:    {:.3} ({} of {} candidates contain it)\n",
                                score.score,
                                score.matching,
                                turn.candidates.len()
                            );
                        }
                    }
                }

                // Show some candidates if count is small
                if turn.candidates.len() <= 10 {
                    println!("Remaining candidates:");
                    for candidate in turn.candidates.iter().take(10) {
                        println!("  • {}", candidate.text().to_uppercase());
                    }
                    println!();
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
