//! Word list loading utilities
//!
//! Reads raw records from a file and selects the fixed-length words the graph is built from.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load raw records from a file
///
/// Records are separated by `\r\n` or `\n`. Nothing else is touched: no trimming,
/// no case folding, empty records are kept (they never match a positive length).
/// The file is read as raw bytes, so a word list in another encoding still loads;
/// individual records that are not valid UTF-8 are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_ladders::wordlists::loader::{filter_by_length, load_records};
///
/// let records = load_records("words.txt").unwrap();
/// let words = filter_by_length(&records, 5);
/// println!("Loaded {} five-letter words", words.len());
/// ```
pub fn load_records<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read(path)?;
    Ok(split_records(&content))
}

/// Split raw bytes into records on line terminators
///
/// A trailing terminator does not produce an empty final record. Records
/// that are not valid UTF-8 are dropped.
#[must_use]
pub fn split_records(content: &[u8]) -> Vec<String> {
    let content = content.strip_suffix(b"\n").unwrap_or(content);
    if content.is_empty() {
        return Vec::new();
    }

    content
        .split(|&byte| byte == b'\n')
        .map(|record| record.strip_suffix(b"\r").unwrap_or(record))
        .filter_map(|record| std::str::from_utf8(record).ok())
        .map(str::to_string)
        .collect()
}

/// Select records whose byte length equals `length`, preserving order
///
/// # Examples
/// ```
/// use word_ladders::wordlists::loader::filter_by_length;
///
/// let words = filter_by_length(&["hello", "hi", "jello"], 5);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[1].text(), "jello");
/// ```
#[must_use]
pub fn filter_by_length<S: AsRef<str>>(records: &[S], length: usize) -> Vec<Word> {
    records
        .iter()
        .map(AsRef::as_ref)
        .filter(|record| record.len() == length)
        .map(Word::new)
        .collect()
}
