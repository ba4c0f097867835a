//! Matching core
//!
//! The pure pairwise rule and the per-item predicates it is built from.

pub mod classes;
pub mod rule;

pub use rule::{match_pair, MatchOutcome};
