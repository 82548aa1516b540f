//! Terminal output and serialization
//!
//! Display utilities for CLI results, plus the JSON writer for the final ladder list.

pub mod display;
pub mod formatters;
pub mod json;

pub use display::{print_generate_result, print_neighbors_result, print_stats_result};
pub use json::save_ladders;
