//! Ladder deduplication, filtering and ordering
//!
//! Turns the raw enumeration into the final ladder list:
//! 1. Keep the shortest ladder per ordered (first, last) pair
//! 2. Drop single-step ladders
//! 3. Drop ladders that keep their leading letter
//! 4. Sort by length, then by first word

use super::config::SelectionConfig;
use crate::core::{EndpointKey, Ladder};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Shortest known ladder per endpoint pair
///
/// Ties keep the ladder seen first. Iteration order is the order in which
/// each endpoint pair was first seen.
#[derive(Debug, Default)]
pub struct LadderIndex {
    slots: FxHashMap<EndpointKey, usize>,
    ladders: Vec<Ladder>,
}

impl LadderIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a ladder to the index
    ///
    /// Returns true if it was stored, either as a new pair or as a strictly
    /// shorter replacement.
    pub fn insert(&mut self, ladder: Ladder) -> bool {
        match self.slots.get(&ladder.endpoints()) {
            Some(&slot) => {
                if ladder.len() < self.ladders[slot].len() {
                    self.ladders[slot] = ladder;
                    true
                } else {
                    false
                }
            }
            None => {
                self.slots.insert(ladder.endpoints(), self.ladders.len());
                self.ladders.push(ladder);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &EndpointKey) -> Option<&Ladder> {
        self.slots.get(key).map(|&slot| &self.ladders[slot])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ladders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ladders.is_empty()
    }

    /// Surviving ladders in first-seen pair order
    #[must_use]
    pub fn into_ladders(self) -> Vec<Ladder> {
        self.ladders
    }
}

impl FromIterator<Ladder> for LadderIndex {
    fn from_iter<I: IntoIterator<Item = Ladder>>(iter: I) -> Self {
        let mut index = Self::new();
        for ladder in iter {
            index.insert(ladder);
        }
        index
    }
}

/// Keep only the shortest ladder for each ordered endpoint pair
#[must_use]
pub fn dedup_by_endpoints<I: IntoIterator<Item = Ladder>>(ladders: I) -> Vec<Ladder> {
    ladders.into_iter().collect::<LadderIndex>().into_ladders()
}

/// True if the ladder passes the configured interest filters
#[must_use]
pub fn is_interesting(ladder: &Ladder, config: &SelectionConfig) -> bool {
    if config.skip_single_step && ladder.len() == 2 {
        return false;
    }
    if config.require_first_letter_change && ladder.keeps_first_letter() {
        return false;
    }
    true
}

/// Ordering used for the final output: length, then first word
#[must_use]
pub fn compare_ladders(a: &Ladder, b: &Ladder) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.first().cmp(b.first()))
}

/// Sort ladders by length, then lexicographically by first word
///
/// The sort is stable, so ladders equal on both keys keep their relative order.
pub fn sort_ladders(ladders: &mut [Ladder]) {
    ladders.sort_by(compare_ladders);
}

/// Run deduplication, filtering and sorting in order
///
/// # Examples
/// ```
/// use word_ladders::core::{Ladder, Word};
/// use word_ladders::ladder::{SelectionConfig, select};
///
/// let ladder = |words: &[&str]| {
///     Ladder::from_words(words.iter().map(|&w| Word::new(w)).collect()).unwrap()
/// };
/// let raw = vec![
///     ladder(&["hello", "cello", "jello"]),
///     ladder(&["hello", "jello"]),
///     ladder(&["cello", "hello", "jello"]),
/// ];
///
/// let selected = select(raw, &SelectionConfig::default());
/// assert_eq!(selected.len(), 1);
/// assert_eq!(selected[0].to_string(), "cello → hello → jello");
/// ```
#[must_use]
pub fn select<I: IntoIterator<Item = Ladder>>(ladders: I, config: &SelectionConfig) -> Vec<Ladder> {
    let mut selected: Vec<Ladder> = dedup_by_endpoints(ladders)
        .into_iter()
        .filter(|ladder| is_interesting(ladder, config))
        .collect();
    sort_ladders(&mut selected);
    selected
}
