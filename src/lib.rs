//! Word Ladders
//!
//! Builds the graph of words that differ by one letter in the same position, enumerates
//! every simple path up to a length bound, and keeps the shortest interesting ladder per
//! endpoint pair.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladders::commands::{GenerateOptions, run_generate};
//!
//! let records = ["hello", "cello", "cells"];
//! let options = GenerateOptions { quiet: true, ..GenerateOptions::default() };
//! let result = run_generate(&records, &options).unwrap();
//!
//! assert_eq!(result.ladders[0].to_string(), "cells → cello → hello");
//! ```

// Core domain types
pub mod core;

// Adjacency graph
pub mod graph;

// Enumeration and selection
pub mod ladder;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output and JSON
pub mod output;
