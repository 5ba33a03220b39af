//! Candidate filtering
//!
//! Narrows a word list to the words consistent with a pattern and a set of
//! excluded letters. Filtering never mutates its input; repeated narrowing of
//! the previous candidate list is the intended amortization across turns.

use crate::core::{LetterSet, Pattern, Word};

/// Filtering strictness
///
/// Both modes are valid; `Strict` produces a candidate set that is a subset
/// of what `Simple` produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Length + exclusion + pattern match only
    #[default]
    Simple,
    /// Additionally reject words that place an already-revealed letter in a
    /// cell still shown as blank. Such a word would imply a second occurrence
    /// the feedback has not disclosed.
    Strict,
}

impl FilterMode {
    /// Create a filter mode from a name string
    ///
    /// Recognizes "strict"; anything else defaults to simple.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "strict" => Self::Strict,
            _ => Self::Simple,
        }
    }
}

/// Filter words down to those consistent with the pattern and exclusions
///
/// Keeps a word iff it has the pattern's length, contains no excluded letter,
/// agrees with every revealed cell, and (in strict mode) has no revealed
/// letter sitting at a blank cell.
#[must_use]
pub fn filter_candidates<'a>(
    words: &[&'a Word],
    pattern: &Pattern,
    excluded: LetterSet,
    mode: FilterMode,
) -> Vec<&'a Word> {
    let revealed = pattern.revealed();
    words
        .iter()
        .copied()
        .filter(|word| keeps(word, pattern, excluded, revealed, mode))
        .collect()
}

fn keeps(
    word: &Word,
    pattern: &Pattern,
    excluded: LetterSet,
    revealed: LetterSet,
    mode: FilterMode,
) -> bool {
    // Covers the length check: a length mismatch never matches
    if !pattern.matches(word) {
        return false;
    }

    if word.letters().intersects(excluded) {
        return false;
    }

    if mode == FilterMode::Strict {
        let bytes = word.bytes();
        if pattern.blank_positions().any(|i| revealed.contains(bytes[i])) {
            return false;
        }
    }

    true
}
