//! Formatting utilities for terminal output

/// Render a pattern with spaced cells, e.g. "c _ _"
#[must_use]
pub fn spaced_pattern(pattern: &str) -> String {
    let mut result = String::with_capacity(pattern.len() * 2);
    for (i, ch) in pattern.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter score as a bar relative to the best score
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    if best <= 0.0 {
        return create_progress_bar(0.0, 1.0, width);
    }
    create_progress_bar(score, best, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_pattern_inserts_gaps() {
        assert_eq!(spaced_pattern("c__"), "c _ _");
        assert_eq!(spaced_pattern("a"), "a");
        assert_eq!(spaced_pattern(""), "");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn score_bar_zero_best() {
        let bar = score_bar(0.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
