//! Position analysis command
//!
//! Given a pattern and the wrong letters so far, reports the candidate count
//! and the full ranked letter-score table for the configured strategy.

use crate::core::{LetterSet, Pattern, Word, frequency_rank};
use crate::solver::{FilterMode, LetterScore, SolveError, Strategy, filter_candidates, score_letters, select_best};

/// Result of analyzing a game position
#[derive(Debug)]
pub struct AnalysisResult {
    pub pattern: String,
    pub excluded: String,
    pub total_candidates: usize,
    /// Scores in descending order, frequency-ranked within ties
    pub scores: Vec<LetterScore>,
    pub best: char,
}

/// Analyze a position against the dictionary
///
/// # Errors
///
/// Returns an error if the pattern or excluded letters fail to parse, if the
/// inputs contradict each other, or if no dictionary word is consistent.
pub fn analyze_pattern(
    pattern: &str,
    excluded: &str,
    words: &[Word],
    strategy: Strategy,
    mode: FilterMode,
) -> Result<AnalysisResult, String> {
    let parsed: Pattern = pattern.parse()?;
    let excluded_set: LetterSet = excluded.parse()?;

    let revealed = parsed.revealed();
    if let Some(letter) = revealed.iter().find(|&l| excluded_set.contains(l)) {
        return Err(SolveError::Contradiction(letter as char).to_string());
    }

    let all: Vec<&Word> = words.iter().collect();
    let candidates = filter_candidates(&all, &parsed, excluded_set, mode);
    if candidates.is_empty() {
        return Err(SolveError::EmptyCandidateSet.to_string());
    }

    let mut scores = score_letters(strategy, &candidates, revealed.union(excluded_set));
    let best = select_best(&scores).map_err(|e| e.to_string())?;

    scores.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| frequency_rank(a.letter).cmp(&frequency_rank(b.letter)))
    });

    Ok(AnalysisResult {
        pattern: pattern.to_string(),
        excluded: excluded_set.to_string(),
        total_candidates: candidates.len(),
        scores,
        best: best as char,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(words: &[&str]) -> Vec<Word> {
        words.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn analyze_frequency_position() {
        let words = dict(&["cat", "car", "can", "cap"]);

        let result =
            analyze_pattern("c__", "", &words, Strategy::Frequency, FilterMode::Simple).unwrap();

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.best, 'a');
        // Sorted descending, so 'a' leads the table
        assert_eq!(result.scores[0].letter, b'a');
        assert_eq!(result.scores[0].matching, 4);
    }

    #[test]
    fn analyze_contradiction_rejected() {
        let words = dict(&["axe"]);

        let result = analyze_pattern("_x_", "x", &words, Strategy::Frequency, FilterMode::Simple);
        assert!(result.unwrap_err().contains("'x'"));
    }

    #[test]
    fn analyze_no_candidates() {
        let words = dict(&["cat"]);

        let result = analyze_pattern("z__", "", &words, Strategy::Frequency, FilterMode::Simple);
        assert!(result.is_err());
    }

    #[test]
    fn analyze_invalid_pattern() {
        let words = dict(&["cat"]);

        assert!(analyze_pattern("c-t", "", &words, Strategy::Frequency, FilterMode::Simple).is_err());
        assert!(analyze_pattern("c__", "4", &words, Strategy::Frequency, FilterMode::Simple).is_err());
    }

    #[test]
    fn scores_sorted_descending() {
        let words = dict(&["march", "marsh", "match", "month", "mouth"]);

        let result =
            analyze_pattern("m___h", "", &words, Strategy::Entropy, FilterMode::Simple).unwrap();

        for window in result.scores.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }
}
