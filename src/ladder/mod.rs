//! Ladder enumeration and selection
//!
//! The enumerator walks the graph exhaustively; the selector reduces its output
//! to one interesting ladder per endpoint pair in a fixed order.

pub mod config;
pub mod enumerator;
pub mod selector;

pub use config::{ConfigError, LadderConfig, SelectionConfig};
pub use enumerator::LadderEnumerator;
pub use selector::{LadderIndex, dedup_by_endpoints, is_interesting, select, sort_ladders};
