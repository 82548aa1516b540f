//! Neighbor lookup command
//!
//! Lists the words one letter-change away from a given word.

use crate::core::Word;
use crate::graph::LadderGraph;

/// Result of a neighbor lookup
pub struct NeighborsResult {
    pub word: String,
    pub neighbors: Vec<String>,
}

/// Look up the neighbors of a word
///
/// # Errors
///
/// Returns an error if the word is not in the filtered word list.
pub fn find_neighbors(
    word: &str,
    words: &[Word],
    graph: &LadderGraph,
) -> Result<NeighborsResult, String> {
    let word_obj = Word::new(word);

    if !words.contains(&word_obj) {
        return Err(format!("Word '{word}' not in word list"));
    }

    Ok(NeighborsResult {
        word: word.to_string(),
        neighbors: graph
            .neighbors(&word_obj)
            .iter()
            .map(|w| w.text().to_string())
            .collect(),
    })
}
