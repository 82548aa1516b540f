//! Lexicon word representation
//!
//! A Word is an immutable, cheaply clonable string. Ladders clone words constantly
//! during enumeration, so the text lives behind an `Arc<str>`.

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// A single lexicon entry
///
/// Identity is the exact byte content. Length and adjacency are measured in bytes,
/// which matches character semantics for ASCII word lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Examples
    /// ```
    /// use word_ladders::core::Word;
    ///
    /// let word = Word::new("hello");
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    /// ```
    pub fn new(text: impl AsRef<str>) -> Self {
        Self {
            text: Arc::from(text.as_ref()),
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Leading byte, or `None` for the empty word
    #[inline]
    #[must_use]
    pub fn first_byte(&self) -> Option<u8> {
        self.bytes().first().copied()
    }

    /// Number of positions at which two equal-length words differ
    ///
    /// Returns `None` when the lengths differ, since position-wise comparison
    /// is undefined in that case.
    #[must_use]
    pub fn distance(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.bytes()
                .iter()
                .zip(other.bytes())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// Check whether two words form a single ladder step
    ///
    /// True iff both words have the same length and differ in exactly one position.
    ///
    /// # Examples
    /// ```
    /// use word_ladders::core::Word;
    ///
    /// let hello = Word::new("hello");
    /// assert!(hello.is_adjacent(&Word::new("jello")));
    /// assert!(!hello.is_adjacent(&Word::new("hello")));
    /// assert!(!hello.is_adjacent(&Word::new("hells!")));
    /// ```
    #[must_use]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }

        // Bail out as soon as a second difference shows up
        let mut diff = 0;
        for (a, b) in self.bytes().iter().zip(other.bytes()) {
            if a != b {
                diff += 1;
                if diff > 1 {
                    return false;
                }
            }
        }
        diff == 1
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Serialize for Word {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.text())
    }
}
