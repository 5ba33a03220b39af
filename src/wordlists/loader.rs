//! Word list loading utilities
//!
//! Loads dictionaries from plain-text files or the embedded constant:
//! one word per line, lowercased, trimmed, deduplicated, optionally filtered
//! by minimum length. Non-alphabetic and empty entries are rejected here so
//! the solver never sees them.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Returns a deduplicated vector of valid `Word`s of at least `min_length`
/// letters, skipping invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 2).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, min_length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(collect_words(content.lines(), min_length))
}

/// Convert the embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::WORDS;
/// use hangman_solver::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(WORDS, 2);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], min_length: usize) -> Vec<Word> {
    collect_words(slice.iter().copied(), min_length)
}

fn collect_words<'a, I: Iterator<Item = &'a str>>(lines: I, min_length: usize) -> Vec<Word> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    lines
        .filter_map(|line| Word::new(line.trim()).ok())
        .filter(|word| word.len() >= min_length)
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}
