//! Letter scoring
//!
//! For every letter not yet guessed, computes how attractive it is as the
//! next guess under the configured strategy. Scoring is parallelized across
//! the alphabet with rayon; each letter's score is a pure function of the
//! candidate set.

use crate::core::{ALPHABET, LetterSet, Word};
use rayon::prelude::*;

/// Letter-scoring strategy
///
/// An explicit parameter rather than a global switch so callers can run
/// different configurations side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Score = number of candidates containing the letter at least once
    #[default]
    Frequency,
    /// Score = average occurrences of the letter per candidate; rewards
    /// letters that appear multiple times in a word
    OccurrenceRate,
    /// Score = binary Shannon entropy of the contains/does-not-contain split
    Entropy,
}

impl Strategy {
    /// Create a strategy from a name string
    ///
    /// Recognizes "entropy", "occurrence"/"occurrence-rate"/"rate";
    /// anything else defaults to frequency.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy,
            "occurrence" | "occurrence-rate" | "rate" => Self::OccurrenceRate,
            _ => Self::Frequency,
        }
    }
}

/// Score for one candidate next letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterScore {
    pub letter: u8,
    pub score: f64,
    /// Candidates containing the letter at least once
    pub matching: usize,
}

/// Score every unguessed letter against the candidate set
///
/// Letters already guessed (revealed or excluded) are omitted entirely and
/// can never be selected again. The result is in alphabetical order.
#[must_use]
pub fn score_letters(
    strategy: Strategy,
    candidates: &[&Word],
    guessed: LetterSet,
) -> Vec<LetterScore> {
    ALPHABET
        .par_iter()
        .filter(|&&letter| !guessed.contains(letter))
        .map(|&letter| {
            let matching = candidates.iter().filter(|w| w.has_letter(letter)).count();
            let score = match strategy {
                Strategy::Frequency => matching as f64,
                Strategy::OccurrenceRate => occurrence_rate(candidates, letter),
                Strategy::Entropy => split_entropy(candidates.len() - matching, matching),
            };
            LetterScore {
                letter,
                score,
                matching,
            }
        })
        .collect()
}

fn occurrence_rate(candidates: &[&Word], letter: u8) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let occurrences: usize = candidates.iter().map(|w| w.count_of(letter)).sum();
    occurrences as f64 / candidates.len() as f64
}

/// Binary Shannon entropy of a Laplace-smoothed two-way split
///
/// `without` candidates lack the letter, `with` contain it. The +1/+2
/// smoothing keeps the metric defined near the boundaries; the score is
/// exactly 0 when either side is empty, by explicit special case, so the
/// smoothed formula never introduces floating noise there.
#[must_use]
pub fn split_entropy(without: usize, with: usize) -> f64 {
    if without == 0 || with == 0 {
        return 0.0;
    }
    let n = (without + with + 2) as f64;
    let dist = [(without + 1) as f64 / n, (with + 1) as f64 / n];
    dist.iter().map(|p| -p * p.log2()).sum()
}
