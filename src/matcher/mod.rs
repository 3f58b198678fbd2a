//! Chained hash-table string matcher.
//!
//! See [`search::find_matches`] for the algorithm and [`types::MatcherContext`]
//! for the underlying hash/chain tables.

pub mod search;
pub mod types;

pub use search::find_matches;
pub use types::{Match, MatcherContext};
