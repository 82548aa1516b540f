//! Ladder representation
//!
//! A Ladder is a non-empty, ordered sequence of words. Enumeration only ever builds
//! ladders by extending a single-word start, so the non-empty invariant holds by construction.

use super::word::Word;
use serde::Serialize;
use std::fmt;

/// Ordered sequence of words, each a single step from the previous one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Ladder {
    words: Vec<Word>,
}

/// Ordered (first word, last word) pair identifying a ladder's endpoints
///
/// Direction matters: `hello → jello` and `jello → hello` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointKey {
    pub first: Word,
    pub last: Word,
}

impl Ladder {
    /// Start a ladder at a single word
    #[must_use]
    pub fn start(word: Word) -> Self {
        Self { words: vec![word] }
    }

    /// Build a ladder from an explicit word sequence
    ///
    /// Returns `None` for an empty sequence. Adjacency is not checked here;
    /// use [`Ladder::is_simple`] and [`Ladder::is_connected`] to validate.
    #[must_use]
    pub fn from_words(words: Vec<Word>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self { words })
        }
    }

    /// Return a new ladder with `word` appended
    ///
    /// # Examples
    /// ```
    /// use word_ladders::core::{Ladder, Word};
    ///
    /// let ladder = Ladder::start(Word::new("hello")).extended(Word::new("cello"));
    /// assert_eq!(ladder.len(), 2);
    /// assert_eq!(ladder.last().text(), "cello");
    /// ```
    #[must_use]
    pub fn extended(&self, word: Word) -> Self {
        let mut words = Vec::with_capacity(self.words.len() + 1);
        words.extend_from_slice(&self.words);
        words.push(word);
        Self { words }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words (not steps)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> &Word {
        &self.words[0]
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> &Word {
        &self.words[self.words.len() - 1]
    }

    /// Check whether a word already appears in the ladder
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Key used to deduplicate ladders sharing both endpoints
    #[must_use]
    pub fn endpoints(&self) -> EndpointKey {
        EndpointKey {
            first: self.first().clone(),
            last: self.last().clone(),
        }
    }

    /// True if the ladder starts and ends with the same leading letter
    #[must_use]
    pub fn keeps_first_letter(&self) -> bool {
        self.first().first_byte() == self.last().first_byte()
    }

    /// True if no word repeats
    #[must_use]
    pub fn is_simple(&self) -> bool {
        self.words
            .iter()
            .enumerate()
            .all(|(i, word)| !self.words[i + 1..].contains(word))
    }

    /// True if every consecutive pair differs in exactly one position
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.words.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]))
    }
}

impl fmt::Display for Ladder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, " → ")?;
            }
            write!(f, "{word}")?;
        }
        Ok(())
    }
}
