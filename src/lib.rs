//! VA disability rating combination engine.
//!
//! Turns a set of independently adjudicated impairment percentages into one
//! official combined rating:
//!
//! - **Combined ratings** (38 CFR 4.25): each rating applies only to the
//!   efficiency left over by the ratings before it, using the published
//!   combined ratings table; the result is rounded to the nearest 10.
//! - **Bilateral factor** (38 CFR 4.26): paired extremities are combined
//!   first and increased by 10% before entering the overall combination.
//! - **Schedule catalog**: common conditions and the levels the schedule
//!   assigns to them.
//! - **Batch evaluation**: many subjects at once, in parallel with the
//!   `parallel` feature.
//!
//! # Architecture
//!
//! Every operation is a pure function of its input: no I/O, no global
//! state, no clocks or randomness. [`RatingCombiner`] carries only its
//! configuration and can be shared across threads. The only failure for a
//! combination is [`RatingError::InvalidRating`], raised before any folding
//! begins.
//!
//! # Examples
//!
//! ```
//! use combined_ratings::{combine, combine_bilateral, combined_value};
//!
//! assert_eq!(combined_value([50, 30]).unwrap().value(), 65);
//! assert_eq!(combine([50, 30]).unwrap().value(), 70);
//!
//! let knees = combine_bilateral(20, 10).unwrap();
//! assert_eq!(combine([knees.value(), 40]).unwrap().value(), 60);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the public data types.
//! - `parallel`: rayon-backed [`RatingCombiner::combine_all`].
//! - `wasm`: wasm-bindgen exports for JavaScript callers.

pub mod batch;
pub mod bilateral;
pub mod combine;
pub mod error;
pub mod schedule;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use bilateral::{BilateralPair, Disability, Laterality, PairedSite, RatingSet, Side};
pub use combine::{
    normalize, Combination, CombinationStep, CombinedRating, CombinerConfig, FoldRounding,
    FoldSource, IntoRating, Rating, RatingCombiner,
};
pub use error::RatingError;

/// Official combined rating with the default configuration.
///
/// See [`RatingCombiner::combine`].
pub fn combine<I>(ratings: I) -> Result<CombinedRating, RatingError>
where
    I: IntoIterator,
    I::Item: IntoRating,
{
    RatingCombiner::default().combine(ratings)
}

/// Whole-person value before the final rounding.
///
/// See [`RatingCombiner::combined_value`].
pub fn combined_value<I>(ratings: I) -> Result<Rating, RatingError>
where
    I: IntoIterator,
    I::Item: IntoRating,
{
    RatingCombiner::default().combined_value(ratings)
}

/// Bilateral factor for one pair of sides.
///
/// See [`RatingCombiner::combine_bilateral`].
pub fn combine_bilateral(
    left: impl IntoRating,
    right: impl IntoRating,
) -> Result<Rating, RatingError> {
    RatingCombiner::default().combine_bilateral(left, right)
}
