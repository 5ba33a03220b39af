//! Core domain types for Hangman
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod pattern;
mod word;

pub use letters::{ALPHABET, FREQUENCY_ORDER, LetterSet, frequency_rank};
pub use pattern::Pattern;
pub use word::{Word, WordError};
