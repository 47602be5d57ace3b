//! Fold execution.
//!
//! [`RatingCombiner`] validates the input, drops zero ratings, sorts the
//! rest in descending order and folds them one at a time into the
//! whole-person value: validate → filter → sort → fold → round.

use super::config::{CombinerConfig, FoldRounding};
use super::table;
use super::types::{round_to_ten, CombinedRating, IntoRating, Rating};
use crate::error::RatingError;
use tracing::{debug, trace};

/// Where a fold step's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FoldSource {
    /// A published cell of the combined ratings table.
    Table,
    /// The whole-person formula, for values the table does not list.
    Formula,
}

/// One application of a rating to the running combined value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombinationStep {
    /// The rating folded in at this step.
    pub rating: Rating,

    /// Combined value before the step.
    pub before: Rating,

    /// Combined value after the step (after fold rounding, if any).
    pub after: Rating,

    pub source: FoldSource,
}

impl CombinationStep {
    /// Percentage points this step added to the whole-person value.
    pub fn contribution(&self) -> u8 {
        self.after.value().saturating_sub(self.before.value())
    }
}

/// Result of a traced combination.
///
/// Contains the official rating along with every intermediate value, so
/// callers can show how each disability contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combination {
    /// Non-zero ratings in the order they were folded (descending).
    pub ratings: Vec<Rating>,

    /// Fold steps; one fewer than `ratings` unless a 100% short-circuited
    /// the fold.
    pub steps: Vec<CombinationStep>,

    /// Whole-person value before rounding to the nearest 10.
    pub combined_value: Rating,

    /// The official combined rating.
    pub rating: CombinedRating,

    /// Whether a 100% rating ended the combination immediately.
    pub absorbed: bool,
}

impl Combination {
    /// Each folded rating paired with the points it contributed.
    ///
    /// The first (highest) rating contributes the value the fold started
    /// from, which is its own value unless fold rounding moved it. Each later
    /// rating contributes its step's increase; after a 100% rating every
    /// other rating contributes 0. The contributions always sum to
    /// `combined_value`.
    pub fn contributions(&self) -> Vec<(Rating, u8)> {
        let mut out = Vec::with_capacity(self.ratings.len());
        let Some(&first) = self.ratings.first() else {
            return out;
        };
        let start = self
            .steps
            .first()
            .map_or(self.combined_value, |step| step.before);
        out.push((first, start.value()));
        out.extend(self.steps.iter().map(|s| (s.rating, s.contribution())));
        if self.absorbed {
            out.extend(self.ratings[1..].iter().map(|&r| (r, 0)));
        }
        out
    }
}

/// Combines independent disability ratings under 38 CFR 4.25.
///
/// The combiner holds only its configuration; every call is independent and
/// deterministic, and the combiner can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use combined_ratings::RatingCombiner;
///
/// let combiner = RatingCombiner::default();
/// assert_eq!(combiner.combine([50, 30]).unwrap().value(), 70);
/// assert_eq!(combiner.combined_value([50, 30]).unwrap().value(), 65);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RatingCombiner {
    config: CombinerConfig,
}

impl RatingCombiner {
    pub fn new(config: CombinerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CombinerConfig {
        &self.config
    }

    /// Computes the official combined rating, rounded to the nearest 10.
    ///
    /// # Errors
    /// [`RatingError::InvalidRating`] if any element is out of range or not
    /// a whole number. Nothing is folded when validation fails.
    pub fn combine<I>(&self, ratings: I) -> Result<CombinedRating, RatingError>
    where
        I: IntoIterator,
        I::Item: IntoRating,
    {
        Ok(self.combine_with_trace(ratings)?.rating)
    }

    /// Computes the whole-person value without the final rounding.
    ///
    /// A single rating comes back unchanged; `[50, 30]` gives 65.
    pub fn combined_value<I>(&self, ratings: I) -> Result<Rating, RatingError>
    where
        I: IntoIterator,
        I::Item: IntoRating,
    {
        Ok(self.combine_with_trace(ratings)?.combined_value)
    }

    /// Computes the combined rating and records every fold step.
    pub fn combine_with_trace<I>(&self, ratings: I) -> Result<Combination, RatingError>
    where
        I: IntoIterator,
        I::Item: IntoRating,
    {
        let validated = validate(ratings)?;
        Ok(self.fold(validated))
    }

    /// Folds already validated ratings.
    pub(crate) fn fold(&self, mut ratings: Vec<Rating>) -> Combination {
        // 1. Filter and sort
        ratings.retain(|r| !r.is_zero());
        ratings.sort_unstable_by(|a, b| b.cmp(a));

        // 2. Short-circuits: empty, single, total
        if ratings.is_empty() {
            return finish(ratings, Vec::new(), Rating::ZERO, false);
        }
        let highest = ratings[0];
        let absorbed = highest == Rating::TOTAL;
        if absorbed || ratings.len() == 1 {
            return finish(ratings, Vec::new(), highest, absorbed);
        }

        // 3. Fold from the highest rating down
        let eager = self.config.fold_rounding == FoldRounding::NearestTen;
        let mut combined = if eager {
            Rating::from_raw(round_to_ten(u32::from(highest.value())))
        } else {
            highest
        };
        let mut steps = Vec::with_capacity(ratings.len() - 1);
        for &rating in &ratings[1..] {
            let (mut next, source) = match table::lookup(combined.value(), rating.value()) {
                Some(cell) => (cell, FoldSource::Table),
                None => (table::formula(combined.value(), rating.value()), FoldSource::Formula),
            };
            if eager {
                next = round_to_ten(u32::from(next));
            }
            let after = Rating::from_raw(next);
            trace!(
                before = combined.value(),
                rating = rating.value(),
                after = next,
                ?source,
                "fold step"
            );
            steps.push(CombinationStep {
                rating,
                before: combined,
                after,
                source,
            });
            combined = after;
        }

        finish(ratings, steps, combined, false)
    }
}

fn finish(
    ratings: Vec<Rating>,
    steps: Vec<CombinationStep>,
    combined_value: Rating,
    absorbed: bool,
) -> Combination {
    let rating = CombinedRating::round(u32::from(combined_value.value()));
    debug!(
        count = ratings.len(),
        combined_value = combined_value.value(),
        rating = rating.value(),
        absorbed,
        "ratings combined"
    );
    Combination {
        ratings,
        steps,
        combined_value,
        rating,
        absorbed,
    }
}

/// Converts every element, rejecting the whole input on the first failure.
pub(crate) fn validate<I>(ratings: I) -> Result<Vec<Rating>, RatingError>
where
    I: IntoIterator,
    I::Item: IntoRating,
{
    ratings
        .into_iter()
        .map(IntoRating::into_rating)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| debug!(%err, "rejected rating input"))
}
