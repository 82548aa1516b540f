//! Word ladder adjacency graph
//!
//! Connects every pair of words that differ in exactly one position. Only words
//! with at least one neighbor become graph entries; isolated words are absent
//! and never serve as enumeration starting points.

mod builder;

pub use builder::GraphStrategy;

use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency map from each connected word to its neighbors
///
/// Built once, read-only afterwards. Start words keep the order in which
/// they first appeared in the input, so enumeration order is reproducible.
#[derive(Debug, Clone, Default)]
pub struct LadderGraph {
    adjacency: FxHashMap<Word, Vec<Word>>,
    starts: Vec<Word>,
    word_count: usize,
}

/// Summary statistics about a graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    /// Distinct words considered
    pub words: usize,
    /// Words with at least one neighbor
    pub connected: usize,
    /// Words with no neighbor
    pub isolated: usize,
    /// Directed edges (each adjacent pair counts twice)
    pub edges: usize,
    /// Highest-degree word, first in input order on ties
    pub max_degree: Option<(Word, usize)>,
    /// Mean degree over connected words
    pub mean_degree: f64,
}

impl LadderGraph {
    /// Build the graph from a word sequence
    ///
    /// Repeated words are considered once, at their first occurrence.
    ///
    /// # Examples
    /// ```
    /// use word_ladders::core::Word;
    /// use word_ladders::graph::{GraphStrategy, LadderGraph};
    ///
    /// let words: Vec<Word> = ["hello", "cello", "hippo"].into_iter().map(Word::new).collect();
    /// let graph = LadderGraph::build(&words, GraphStrategy::Pairwise);
    ///
    /// assert_eq!(graph.neighbors(&Word::new("hello")), &[Word::new("cello")]);
    /// assert!(!graph.contains(&Word::new("hippo")));
    /// ```
    #[must_use]
    pub fn build(words: &[Word], strategy: GraphStrategy) -> Self {
        let mut seen = FxHashSet::default();
        let unique: Vec<Word> = words
            .iter()
            .filter(|word| seen.insert(*word))
            .cloned()
            .collect();

        let neighbor_indices = strategy.neighbor_indices(&unique);

        let mut adjacency = FxHashMap::default();
        let mut starts = Vec::new();
        for (word, indices) in unique.iter().zip(neighbor_indices) {
            if indices.is_empty() {
                continue;
            }
            let neighbors = indices.into_iter().map(|j| unique[j].clone()).collect();
            adjacency.insert(word.clone(), neighbors);
            starts.push(word.clone());
        }

        Self {
            adjacency,
            starts,
            word_count: unique.len(),
        }
    }

    /// Neighbors of a word, in input order
    ///
    /// Returns an empty slice for words that are isolated or not in the lexicon.
    #[must_use]
    pub fn neighbors(&self, word: &Word) -> &[Word] {
        self.adjacency.get(word).map_or(&[], Vec::as_slice)
    }

    /// True if the word has at least one neighbor
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Connected words in first-seen order
    #[must_use]
    pub fn start_words(&self) -> &[Word] {
        &self.starts
    }

    /// Number of connected words
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Number of distinct words the graph was built from, isolated ones included
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Directed edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn stats(&self) -> GraphStats {
        let edges = self.edge_count();
        let connected = self.len();

        let max_degree = self
            .starts
            .iter()
            .map(|word| (word, self.neighbors(word).len()))
            .fold(None::<(&Word, usize)>, |best, (word, degree)| match best {
                Some((_, best_degree)) if best_degree >= degree => best,
                _ => Some((word, degree)),
            })
            .map(|(word, degree)| (word.clone(), degree));

        let mean_degree = if connected > 0 {
            edges as f64 / connected as f64
        } else {
            0.0
        };

        GraphStats {
            words: self.word_count,
            connected,
            isolated: self.word_count - connected,
            edges,
            max_degree,
            mean_degree,
        }
    }
}
