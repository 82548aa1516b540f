//! Core domain types for word ladders
//!
//! This module contains the fundamental domain types. Everything here is pure
//! and infallible; I/O lives in `wordlists` and `output`.

mod ladder;
mod word;

pub use ladder::{EndpointKey, Ladder};
pub use word::Word;
