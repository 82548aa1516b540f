//! Adjacency construction strategies
//!
//! Both strategies produce the same neighbor lists in the same order: neighbors
//! appear in the order their words appear in the input.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// How to discover adjacent word pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphStrategy {
    /// Compare every pair of words, O(N²·L)
    #[default]
    Pairwise,
    /// Group words by wildcard keys, one key per masked position
    Bucketed,
}

impl GraphStrategy {
    /// Create a strategy from a name string
    ///
    /// Unknown names fall back to pairwise comparison.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "bucketed" | "buckets" | "fast" => Self::Bucketed,
            _ => Self::Pairwise,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pairwise => "pairwise",
            Self::Bucketed => "bucketed",
        }
    }

    /// Neighbor indices for every word in `words`
    ///
    /// `words` must already be free of duplicates. Each inner list is ascending.
    pub(crate) fn neighbor_indices(self, words: &[Word]) -> Vec<Vec<usize>> {
        match self {
            Self::Pairwise => pairwise(words),
            Self::Bucketed => bucketed(words),
        }
    }
}

fn pairwise(words: &[Word]) -> Vec<Vec<usize>> {
    words
        .iter()
        .map(|word1| {
            words
                .iter()
                .enumerate()
                .filter(|(_, word2)| word1.is_adjacent(word2))
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}

fn bucketed(words: &[Word]) -> Vec<Vec<usize>> {
    // Key: masked position plus the word's bytes with that position removed
    let mut buckets: FxHashMap<(usize, Vec<u8>), Vec<usize>> = FxHashMap::default();

    for (index, word) in words.iter().enumerate() {
        let bytes = word.bytes();
        for position in 0..bytes.len() {
            let mut masked = Vec::with_capacity(bytes.len() - 1);
            masked.extend_from_slice(&bytes[..position]);
            masked.extend_from_slice(&bytes[position + 1..]);
            buckets.entry((position, masked)).or_default().push(index);
        }
    }

    let mut neighbors = vec![Vec::new(); words.len()];
    for members in buckets.values().filter(|members| members.len() > 1) {
        for &i in members {
            neighbors[i].extend(members.iter().copied().filter(|&j| j != i));
        }
    }

    // Adjacent words share exactly one bucket, so sorting alone restores input order
    for list in &mut neighbors {
        list.sort_unstable();
    }

    neighbors
}
