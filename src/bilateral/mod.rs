//! Bilateral factor (38 CFR 4.26).
//!
//! When a disability affects both arms, both legs or paired skeletal
//! muscles, the two sides are combined first and the result is increased by
//! 10% before it enters the overall combination. The paired ratings are then
//! replaced by that single factored rating.
//!
//! Callers can either build a [`RatingSet`] with explicit
//! [`BilateralPair`]s or hand over labelled [`Disability`] values and let
//! [`pair_disabilities`] match left and right sides of the same
//! [`PairedSite`].
//!
//! # References
//!
//! 38 CFR 4.26, "Bilateral factor"

mod engine;
mod pairing;
mod types;

pub use pairing::pair_disabilities;
pub use types::{BilateralPair, Disability, Laterality, PairedSite, RatingSet, Side};
