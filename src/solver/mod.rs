//! Hangman solving engine
//!
//! Candidate filtering, letter scoring, guess selection, and the per-turn
//! engine that ties them together.

mod engine;
mod error;
mod filter;
mod scorer;
mod selector;

pub use engine::{Engine, Guess, Turn, TurnState};
pub use error::SolveError;
pub use filter::{FilterMode, filter_candidates};
pub use scorer::{LetterScore, Strategy, score_letters, split_entropy};
pub use selector::select_best;
