//! Bounded depth-first ladder enumeration
//!
//! Produces every simple path through the graph up to the length bound,
//! prefixes included. The search is exponential in the branching factor;
//! the bound is what keeps it finite.

use crate::core::{Ladder, Word};
use crate::graph::LadderGraph;
use indicatif::ProgressBar;
use rayon::prelude::*;

/// Enumerates ladders over a read-only graph
pub struct LadderEnumerator<'a> {
    graph: &'a LadderGraph,
    max_length: usize,
}

impl<'a> LadderEnumerator<'a> {
    /// Create an enumerator emitting ladders of at most `max_length` words
    #[must_use]
    pub const fn new(graph: &'a LadderGraph, max_length: usize) -> Self {
        Self { graph, max_length }
    }

    /// All ladders beginning at `start`, in depth-first order
    ///
    /// Every simple path of one to `max_length` words is emitted exactly once,
    /// each path after all of its extensions. The bound caps extension, not
    /// emission: paths that reach `max_length` words are emitted without
    /// being extended further.
    ///
    /// # Examples
    /// ```
    /// use word_ladders::core::Word;
    /// use word_ladders::graph::{GraphStrategy, LadderGraph};
    /// use word_ladders::ladder::LadderEnumerator;
    ///
    /// let words: Vec<Word> = ["hello", "cello", "jello"].into_iter().map(Word::new).collect();
    /// let graph = LadderGraph::build(&words, GraphStrategy::Pairwise);
    /// let ladders = LadderEnumerator::new(&graph, 7).from_start(&Word::new("hello"));
    ///
    /// assert_eq!(ladders.len(), 5);
    /// assert_eq!(ladders[0].to_string(), "hello → cello → jello");
    /// ```
    #[must_use]
    pub fn from_start(&self, start: &Word) -> Vec<Ladder> {
        let mut ladders = Vec::new();
        self.extend_into(Ladder::start(start.clone()), &mut ladders);
        ladders
    }

    /// Ladders from every start word, sequentially
    #[must_use]
    pub fn enumerate(&self) -> Vec<Ladder> {
        self.graph
            .start_words()
            .iter()
            .flat_map(|start| self.from_start(start))
            .collect()
    }

    /// Ladders from every start word, one rayon task per start word
    ///
    /// Output order matches [`LadderEnumerator::enumerate`]. `progress` ticks once per start word.
    #[must_use]
    pub fn enumerate_parallel(&self, progress: &ProgressBar) -> Vec<Ladder> {
        let per_start: Vec<Vec<Ladder>> = self
            .graph
            .start_words()
            .par_iter()
            .map(|start| {
                let ladders = self.from_start(start);
                progress.inc(1);
                ladders
            })
            .collect();

        per_start.into_iter().flatten().collect()
    }

    fn extend_into(&self, ladder: Ladder, out: &mut Vec<Ladder>) {
        let candidates: Vec<&Word> = self
            .graph
            .neighbors(ladder.last())
            .iter()
            .filter(|word| !ladder.contains(word))
            .collect();

        // Dead end
        if candidates.is_empty() {
            out.push(ladder);
            return;
        }

        if ladder.len() + 1 >= self.max_length {
            out.extend(
                candidates
                    .into_iter()
                    .map(|word| ladder.extended(word.clone())),
            );
            out.push(ladder);
            return;
        }

        for word in candidates {
            self.extend_into(ladder.extended(word.clone()), out);
        }
        out.push(ladder);
    }
}
