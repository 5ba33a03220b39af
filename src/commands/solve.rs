//! Word solving command
//!
//! Plays a full game against a known target word and returns the guess
//! sequence. This is the evaluator side of the turn protocol: only this layer
//! reads the hidden answer; the engine sees nothing but pattern and feedback.

use crate::core::Word;
use crate::solver::{Engine, Guess, TurnState};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Upper bound on turns; 26 guesses always resolve a game
    pub max_turns: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_turns: 26,
        }
    }
}

/// Result of playing a word to completion
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<GuessStep>,
    pub wrong_guesses: usize,
    pub solved: bool,
}

/// A single turn in the solution
pub struct GuessStep {
    /// The guessed letter, or the whole word when short-circuiting
    pub guess: String,
    pub correct: bool,
    /// Pattern after this guess was applied
    pub pattern: String,
    /// Candidates remaining when the guess was made
    pub candidates: usize,
    /// Score of the chosen letter; `None` for a short-circuit word guess
    pub score: Option<f64>,
}

/// Play the given target word to completion with the engine
///
/// # Errors
///
/// Returns an error if the target word is invalid or outside the dictionary
/// (the engine surfaces an empty candidate set).
pub fn solve_word(config: &SolveConfig, engine: &Engine<'_>) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Invalid target word: {e}"))?;

    let mut state = TurnState::new(target.len());
    let mut steps: Vec<GuessStep> = Vec::new();
    let mut wrong_guesses = 0;

    while state.pattern.is_unfinished() && steps.len() < config.max_turns {
        let turn = engine.suggest(&state).map_err(|e| e.to_string())?;
        let candidates_before = turn.candidates.len();

        match turn.guess {
            Guess::Word(word) => {
                // Single candidate left; the engine answers with the word
                let correct = word.text() == target.text();
                let pattern = if correct {
                    word.text().to_string()
                } else {
                    wrong_guesses += 1;
                    state.pattern.to_string()
                };
                steps.push(GuessStep {
                    guess: word.text().to_string(),
                    correct,
                    pattern,
                    candidates: candidates_before,
                    score: None,
                });
                return Ok(SolveResult {
                    target: config.target.clone(),
                    steps,
                    wrong_guesses,
                    solved: correct,
                });
            }
            Guess::Letter(letter) => {
                let correct = target.has_letter(letter);
                let score = turn
                    .scores
                    .iter()
                    .find(|s| s.letter == letter)
                    .map(|s| s.score);

                let pattern = if correct {
                    state.pattern.reveal(&target, letter)
                } else {
                    wrong_guesses += 1;
                    state.excluded.insert(letter);
                    state.pattern.clone()
                };

                steps.push(GuessStep {
                    guess: (letter as char).to_string(),
                    correct,
                    pattern: pattern.to_string(),
                    candidates: candidates_before,
                    score,
                });

                state = TurnState {
                    pattern,
                    excluded: state.excluded,
                    candidates: Some(turn.candidates),
                };
            }
        }
    }

    let solved = !state.pattern.is_unfinished();
    Ok(SolveResult {
        target: config.target.clone(),
        steps,
        wrong_guesses,
        solved,
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
    fn solve_word_succeeds() {
        let words = dict(&["cat", "car", "can", "cap", "dog", "pig"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let config = SolveConfig::new("cat".to_string());

        let result = solve_word(&config, &engine).unwrap();

        assert!(result.solved);
        assert!(!result.steps.is_empty());
        assert_eq!(result.steps.last().unwrap().pattern, "cat");
    }

    #[test]
    fn wrong_guess_tally_matches_steps() {
        let words = dict(&["march", "marsh", "match", "month", "mouth"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let config = SolveConfig::new("match".to_string());

        let result = solve_word(&config, &engine).unwrap();

        assert!(result.solved);
        let wrong_steps = result.steps.iter().filter(|s| !s.correct).count();
        assert_eq!(result.wrong_guesses, wrong_steps);
    }

    #[test]
    fn candidates_never_grow() {
        let words = dict(&["cat", "car", "can", "cap", "cot", "cut"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let config = SolveConfig::new("cut".to_string());

        let result = solve_word(&config, &engine).unwrap();

        for window in result.steps.windows(2) {
            assert!(window[1].candidates <= window[0].candidates);
        }
    }

    #[test]
    fn short_circuit_ends_with_whole_word() {
        let words = dict(&["cat", "dog"]);
        let engine =
            Engine::new(&words, Strategy::Frequency, FilterMode::Simple).with_short_circuit(true);
        let config = SolveConfig::new("dog".to_string());

        let result = solve_word(&config, &engine).unwrap();

        assert!(result.solved);
        let last = result.steps.last().unwrap();
        assert_eq!(last.guess, "dog");
        assert!(last.score.is_none());
    }

    #[test]
    fn target_outside_dictionary_is_an_error() {
        let words = dict(&["cat", "dog"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let config = SolveConfig::new("zebra".to_string());

        let result = solve_word(&config, &engine);
        assert!(result.is_err());
    }

    #[test]
    fn invalid_target_is_an_error() {
        let words = dict(&["cat"]);
        let engine = Engine::new(&words, Strategy::Frequency, FilterMode::Simple);
        let config = SolveConfig::new("c4t".to_string());

        assert!(solve_word(&config, &engine).is_err());
    }

    #[test]
    fn bounded_by_26_turns() {
        let words = dict(&["cat", "car", "can", "cap", "cot", "cut", "cup", "cub"]);
        let engine = Engine::new(&words, Strategy::Entropy, FilterMode::Simple);

        for target in ["cat", "cup", "cub"] {
            let config = SolveConfig::new(target.to_string());
            let result = solve_word(&config, &engine).unwrap();
            assert!(result.solved);
            assert!(result.steps.len() <= 26);
        }
    }
}
