//! Word lists for Hangman solving
//!
//! Provides the embedded dictionary compiled into the binary plus a loader for
//! custom plain-text word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
