//! Per-turn guessing engine
//!
//! The engine is stateless between calls: each turn is a pure function of the
//! `TurnState` the caller threads through. The caller owns the pattern, the
//! excluded-letter set, and the optional previously-narrowed candidate list.

use super::error::SolveError;
use super::filter::{FilterMode, filter_candidates};
use super::scorer::{LetterScore, Strategy, score_letters};
use super::selector::select_best;
use crate::core::{LetterSet, Pattern, Word};

/// Hangman guessing engine
///
/// Holds the shared read-only dictionary and the configured strategy. Safe to
/// share across concurrent games; all per-game state lives in [`TurnState`].
pub struct Engine<'a> {
    dictionary: &'a [Word],
    strategy: Strategy,
    filter_mode: FilterMode,
    short_circuit: bool,
}

/// Per-game state threaded through the engine by the caller
///
/// `candidates` carries the candidate list narrowed on the previous turn, or
/// `None` on the first turn to start from the full dictionary.
#[derive(Debug, Clone)]
pub struct TurnState<'a> {
    pub pattern: Pattern,
    pub excluded: LetterSet,
    pub candidates: Option<Vec<&'a Word>>,
}

impl<'a> TurnState<'a> {
    /// Fresh state for a game against a target of the given length
    #[must_use]
    pub fn new(length: usize) -> Self {
        Self {
            pattern: Pattern::fresh(length),
            excluded: LetterSet::EMPTY,
            candidates: None,
        }
    }
}

/// The engine's answer for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess<'a> {
    /// Guess this letter next
    Letter(u8),
    /// Short-circuit: only one candidate remains, emit it whole
    Word(&'a Word),
}

/// Result of one engine turn
#[derive(Debug, Clone)]
pub struct Turn<'a> {
    pub guess: Guess<'a>,
    /// Candidates consistent with the state this turn; thread into the next
    /// `TurnState` to avoid re-filtering the full dictionary
    pub candidates: Vec<&'a Word>,
    /// Scores for every unguessed letter; empty when short-circuiting
    pub scores: Vec<LetterScore>,
}

impl<'a> Engine<'a> {
    /// Create an engine over a shared dictionary
    #[must_use]
    pub const fn new(dictionary: &'a [Word], strategy: Strategy, filter_mode: FilterMode) -> Self {
        Self {
            dictionary,
            strategy,
            filter_mode,
            short_circuit: false,
        }
    }

    /// Enable or disable the single-candidate short circuit
    ///
    /// When enabled, a turn with exactly one remaining candidate emits the
    /// whole word instead of continuing letter by letter.
    #[must_use]
    pub const fn with_short_circuit(mut self, enabled: bool) -> Self {
        self.short_circuit = enabled;
        self
    }

    /// The dictionary this engine draws candidates from
    #[must_use]
    pub const fn dictionary(&self) -> &'a [Word] {
        self.dictionary
    }

    /// Compute the guess for one turn
    ///
    /// Filters candidates, scores every unguessed letter, and selects the
    /// best one. The caller applies the guess against the hidden target and
    /// threads the updated state into the next call.
    ///
    /// # Errors
    /// - `Contradiction` if an excluded letter appears in the pattern
    /// - `EmptyCandidateSet` if no dictionary word is consistent
    /// - `NoGuessPossible` if every letter has been guessed
    pub fn suggest(&self, state: &TurnState<'a>) -> Result<Turn<'a>, SolveError> {
        let revealed = state.pattern.revealed();

        if let Some(letter) = revealed.iter().find(|&l| state.excluded.contains(l)) {
            return Err(SolveError::Contradiction(letter as char));
        }

        let candidates = match &state.candidates {
            Some(previous) => {
                filter_candidates(previous, &state.pattern, state.excluded, self.filter_mode)
            }
            None => {
                let all: Vec<&Word> = self.dictionary.iter().collect();
                filter_candidates(&all, &state.pattern, state.excluded, self.filter_mode)
            }
        };

        if candidates.is_empty() {
            return Err(SolveError::EmptyCandidateSet);
        }

        if self.short_circuit && candidates.len() == 1 && state.pattern.is_unfinished() {
            return Ok(Turn {
                guess: Guess::Word(candidates[0]),
                candidates,
                scores: Vec::new(),
            });
        }

        let guessed = revealed.union(state.excluded);
        let scores = score_letters(self.strategy, &candidates, guessed);
        let letter = select_best(&scores)?;

        Ok(Turn {
            guess: Guess::Letter(letter),
            candidates,
            scores,
        })
    }
}
