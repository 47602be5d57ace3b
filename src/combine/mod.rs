//! Combined ratings (38 CFR 4.25).
//!
//! Reduces a set of independent disability percentages to one combined
//! rating using the VA "whole person" concept: each rating applies only to
//! the efficiency left over by the ratings before it.
//!
//! - **Fold**: ratings are sorted in descending order and folded one at a
//!   time, `c = c + r - c * r / 100`, taking the published table cell where
//!   one exists.
//! - **Rounding**: the final value is rounded half-up to the nearest 10.
//! - **Absorption**: a 100% rating ends the combination at 100.
//!
//! # References
//!
//! 38 CFR 4.25, "Combined ratings table"

mod config;
mod engine;
mod table;
mod types;

pub use config::{CombinerConfig, FoldRounding};
pub use engine::{Combination, CombinationStep, FoldSource, RatingCombiner};
pub use types::{normalize, CombinedRating, IntoRating, Rating};

pub(crate) use engine::validate;
