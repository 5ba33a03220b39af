//! Solver error types
//!
//! Every condition here is a deterministic function of the turn input, so
//! none of them is retryable with the same inputs.

use std::fmt;

/// Error type for a single solver turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// An excluded letter also appears in the revealed pattern.
    /// Rejected at the turn-input boundary; the game cannot proceed.
    Contradiction(char),
    /// Filtering produced zero candidates: the target word is outside the
    /// dictionary.
    EmptyCandidateSet,
    /// Every letter has already been guessed. Terminal for the game.
    NoGuessPossible,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contradiction(letter) => {
                write!(f, "Excluded letter {letter:?} appears in the pattern")
            }
            Self::EmptyCandidateSet => write!(f, "No dictionary word matches the pattern"),
            Self::NoGuessPossible => write!(f, "No guess possible: all letters already guessed"),
        }
    }
}

impl std::error::Error for SolveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert!(
            SolveError::Contradiction('x')
                .to_string()
                .contains("'x'")
        );
        assert!(
            SolveError::NoGuessPossible
                .to_string()
                .contains("No guess possible")
        );
        assert!(
            SolveError::EmptyCandidateSet
                .to_string()
                .contains("No dictionary word")
        );
    }
}
