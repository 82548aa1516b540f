//! JSON serialization of the final ladder list
//!
//! Ladders are written as an array of arrays of strings.

use crate::core::Ladder;
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Serialize ladders to a JSON string
///
/// # Errors
///
/// Returns an error if serialization fails.
///
/// # Examples
/// ```
/// use word_ladders::core::{Ladder, Word};
/// use word_ladders::output::json::ladders_to_json;
///
/// let ladder = Ladder::start(Word::new("cells")).extended(Word::new("cello"));
/// assert_eq!(ladders_to_json(&[ladder], false).unwrap(), r#"[["cells","cello"]]"#);
/// ```
pub fn ladders_to_json(ladders: &[Ladder], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(ladders)
    } else {
        serde_json::to_string(ladders)
    }
}

/// Write ladders to `path`, or to stdout when `path` is `-`
///
/// The JSON is fully serialized before the file is created, so a failure
/// never leaves a partial artifact behind.
///
/// # Errors
///
/// Returns an error if serialization fails or the destination cannot be written.
pub fn save_ladders(ladders: &[Ladder], path: &Path, pretty: bool) -> Result<()> {
    let json = ladders_to_json(ladders, pretty).context("Failed to serialize ladders")?;

    if path.as_os_str() == "-" {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}").context("Failed to write ladders to stdout")?;
        return Ok(());
    }

    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn ladder(words: &[&str]) -> Ladder {
        Ladder::from_words(words.iter().map(|&w| Word::new(w)).collect()).unwrap()
    }

    #[test]
    fn compact_json() {
        let ladders = vec![
            ladder(&["cells", "cello", "hello"]),
            ladder(&["hello", "cello", "cells"]),
        ];
        assert_eq!(
            ladders_to_json(&ladders, false).unwrap(),
            r#"[["cells","cello","hello"],["hello","cello","cells"]]"#
        );
    }

    #[test]
    fn empty_list() {
        assert_eq!(ladders_to_json(&[], false).unwrap(), "[]");
    }

    #[test]
    fn pretty_json_parses_back() {
        let ladders = vec![ladder(&["cat", "cot", "dot"])];
        let json = ladders_to_json(&ladders, true).unwrap();

        assert!(json.contains('\n'));
        let parsed: Vec<Vec<String>> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![vec!["cat", "cot", "dot"]]);
    }

    #[test]
    fn save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ladders.json");

        save_ladders(&[ladder(&["cat", "cot", "dot"])], &path, false).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"[["cat","cot","dot"]]"#
        );
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ladders.json");

        let err = save_ladders(&[], &path, false).unwrap_err();
        assert!(err.to_string().contains("Failed to write"));
    }
}
