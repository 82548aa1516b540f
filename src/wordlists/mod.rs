//! Word lists for ladder building
//!
//! Provides the file loader plus a small embedded sample lexicon compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_count_matches_const() {
        assert_eq!(SAMPLE.len(), SAMPLE_COUNT);
    }

    #[test]
    fn sample_words_are_five_lowercase_letters() {
        for &word in SAMPLE {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn sample_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = SAMPLE.iter().collect();
        assert_eq!(unique.len(), SAMPLE.len());
    }

    #[test]
    fn sample_contains_classic_ladder() {
        for word in ["hello", "cello", "jello"] {
            assert!(SAMPLE.contains(&word), "Sample is missing '{word}'");
        }
    }
}
