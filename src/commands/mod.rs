//! Command implementations

pub mod generate;
pub mod neighbors;
pub mod stats;

pub use generate::{GenerateOptions, GenerateResult, build_graph, run_generate};
pub use neighbors::{NeighborsResult, find_neighbors};
pub use stats::{StatsResult, run_stats};
