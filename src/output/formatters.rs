//! Formatting utilities for terminal output

use crate::core::Ladder;
use std::collections::BTreeMap;

/// Format a ladder as uppercase words joined by arrows
#[must_use]
pub fn ladder_to_string(ladder: &Ladder) -> String {
    ladder.to_string().to_uppercase()
}

/// Count ladders by word count, ascending
#[must_use]
pub fn length_distribution(ladders: &[Ladder]) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();
    for ladder in ladders {
        *distribution.entry(ladder.len()).or_insert(0) += 1;
    }
    distribution
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn ladder(words: &[&str]) -> Ladder {
        Ladder::from_words(words.iter().map(|&w| Word::new(w)).collect()).unwrap()
    }

    #[test]
    fn ladder_uppercased() {
        assert_eq!(
            ladder_to_string(&ladder(&["hello", "cello", "cells"])),
            "HELLO → CELLO → CELLS"
        );
    }

    #[test]
    fn distribution_counts_lengths() {
        let ladders = vec![
            ladder(&["a", "b", "c"]),
            ladder(&["d", "e", "f"]),
            ladder(&["a", "b", "c", "d"]),
        ];
        let distribution = length_distribution(&ladders);

        assert_eq!(distribution.get(&3), Some(&2));
        assert_eq!(distribution.get(&4), Some(&1));
        assert_eq!(distribution.len(), 2);
    }

    #[test]
    fn distribution_empty() {
        assert!(length_distribution(&[]).is_empty());
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
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
