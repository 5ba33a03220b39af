//! Guess selection
//!
//! Picks the highest-scoring letter, breaking exact ties with the fixed
//! English letter-frequency ordering.

use super::error::SolveError;
use super::scorer::LetterScore;
use crate::core::frequency_rank;

/// Select the best letter from the scored list
///
/// On exact score ties the letter earlier in the frequency table wins, which
/// makes selection fully deterministic.
///
/// # Errors
/// Returns `SolveError::NoGuessPossible` when the list is empty (all 26
/// letters already guessed). Terminal for the game, not a retryable state.
pub fn select_best(scores: &[LetterScore]) -> Result<u8, SolveError> {
    scores
        .iter()
        .max_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then_with(|| frequency_rank(b.letter).cmp(&frequency_rank(a.letter)))
        })
        .map(|s| s.letter)
        .ok_or(SolveError::NoGuessPossible)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(letter: u8, score: f64) -> LetterScore {
        LetterScore {
            letter,
            score,
            matching: 0,
        }
    }

    #[test]
    fn picks_highest_score() {
        let scores = vec![score(b'z', 3.0), score(b'a', 1.0), score(b'q', 2.0)];
        assert_eq!(select_best(&scores).unwrap(), b'z');
    }

    #[test]
    fn ties_break_by_frequency_order() {
        // 'e' precedes 't' precedes 'a' in the table
        let scores = vec![score(b'a', 1.0), score(b't', 1.0), score(b'e', 1.0)];
        assert_eq!(select_best(&scores).unwrap(), b'e');

        let scores = vec![score(b'a', 1.0), score(b't', 1.0)];
        assert_eq!(select_best(&scores).unwrap(), b't');
    }

    #[test]
    fn tie_break_is_deterministic_across_orderings() {
        let mut scores = vec![score(b'j', 2.0), score(b'h', 2.0), score(b'x', 2.0)];
        assert_eq!(select_best(&scores).unwrap(), b'h');
        scores.reverse();
        assert_eq!(select_best(&scores).unwrap(), b'h');
    }

    #[test]
    fn score_beats_frequency() {
        // 'z' is last in the table but has the higher score
        let scores = vec![score(b'e', 1.0), score(b'z', 1.5)];
        assert_eq!(select_best(&scores).unwrap(), b'z');
    }

    #[test]
    fn empty_list_is_no_guess_possible() {
        assert_eq!(select_best(&[]), Err(SolveError::NoGuessPossible));
    }
}
