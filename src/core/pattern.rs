//! Partially revealed word pattern
//!
//! A pattern is a fixed-length sequence of cells, each either a known
//! lowercase letter or a blank (`_`). The length is fixed for the lifetime of
//! one game and equals the target word's length. Updates never mutate in
//! place: `reveal` returns a new `Pattern`, so historical patterns kept for
//! logging remain valid.

use super::{LetterSet, Word};
use std::fmt;

const BLANK: u8 = b'_';

/// The revealed state of one Hangman word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<u8>,
}

impl Pattern {
    /// Create an all-blank pattern of the given length
    #[must_use]
    pub fn fresh(length: usize) -> Self {
        Self {
            cells: vec![BLANK; length],
        }
    }

    /// Number of cells
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the pattern has zero cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letter at a cell, or `None` if it is still blank
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<u8> {
        match self.cells[index] {
            BLANK => None,
            letter => Some(letter),
        }
    }

    /// Does this pattern match the given word?
    ///
    /// True iff the word has equal length and every non-blank cell equals the
    /// corresponding letter of the word. A length mismatch is not an error,
    /// just a non-match.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        if self.cells.len() != word.len() {
            return false;
        }
        self.cells
            .iter()
            .zip(word.bytes())
            .all(|(&cell, &letter)| cell == BLANK || cell == letter)
    }

    /// Does the pattern still have blanks?
    #[must_use]
    pub fn is_unfinished(&self) -> bool {
        self.cells.contains(&BLANK)
    }

    /// Fill in every position where `target` has `letter`, returning a new pattern
    ///
    /// All other cells are unchanged. Revealing a letter the target does not
    /// contain returns an identical pattern.
    ///
    /// # Panics
    /// Panics if the target's length differs from the pattern's. Both derive
    /// from the same game, so a mismatch is a caller bug, not a game state.
    #[must_use]
    pub fn reveal(&self, target: &Word, letter: u8) -> Self {
        assert_eq!(
            self.cells.len(),
            target.len(),
            "pattern/target length mismatch"
        );
        let cells = self
            .cells
            .iter()
            .zip(target.bytes())
            .map(|(&cell, &word_letter)| if word_letter == letter { letter } else { cell })
            .collect();
        Self { cells }
    }

    /// The set of letters revealed so far
    #[must_use]
    pub fn revealed(&self) -> LetterSet {
        self.cells.iter().copied().collect()
    }

    /// Indices of cells that are still blank
    pub fn blank_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == BLANK)
            .map(|(i, _)| i)
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse a pattern like `"c__"` or `"m...h"`
    ///
    /// Accepts lowercase letters for revealed cells and `_` or `.` for blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Pattern must not be empty".to_string());
        }

        let mut cells = Vec::with_capacity(s.len());
        for ch in s.chars() {
            match ch {
                'a'..='z' => cells.push(ch as u8),
                'A'..='Z' => cells.push(ch.to_ascii_lowercase() as u8),
                '_' | '.' => cells.push(BLANK),
                _ => return Err(format!("Invalid pattern cell: {ch:?}")),
            }
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            write!(f, "{}", cell as char)?;
        }
        Ok(())
    }
}
