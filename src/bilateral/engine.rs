//! Bilateral factor and set-level combination.

use super::pairing::pair_disabilities;
use super::types::{nonzero, BilateralPair, Disability, RatingSet};
use crate::combine::{CombinedRating, IntoRating, Rating, RatingCombiner};
use crate::error::RatingError;
use tracing::debug;

/// Applies the 10% bilateral factor to a combined value and rounds half-up
/// to the nearest 10, clamped to 100.
///
/// Works in tenths of a percent so `28 * 1.1 = 30.8` is never subject to
/// floating-point error.
fn with_bilateral_factor(combined: u8) -> Rating {
    let tenths = u32::from(combined) * 11;
    let rounded = ((tenths + 50) / 100 * 10).min(100);
    Rating::from_raw(rounded as u8)
}

impl RatingCombiner {
    /// Combines the two sides of a paired extremity under 38 CFR 4.26.
    ///
    /// The sides are folded like any two ratings, the result is increased by
    /// the 10% bilateral factor and rounded to the nearest 10. The returned
    /// rating stands in for both sides in the overall combination.
    ///
    /// # Errors
    /// [`RatingError::InvalidRating`] if either side is out of range or 0%.
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_ratings::RatingCombiner;
    ///
    /// // 20 and 10 combine to 28; 28 * 1.1 = 30.8, which rounds to 30.
    /// let rating = RatingCombiner::default().combine_bilateral(20, 10).unwrap();
    /// assert_eq!(rating.value(), 30);
    /// ```
    pub fn combine_bilateral(
        &self,
        left: impl IntoRating,
        right: impl IntoRating,
    ) -> Result<Rating, RatingError> {
        let left = nonzero(left.into_rating()?)?;
        let right = nonzero(right.into_rating()?)?;
        Ok(self.apply_pair(left, right))
    }

    fn apply_pair(&self, left: Rating, right: Rating) -> Rating {
        let combined = self.fold(vec![left, right]).combined_value;
        let rating = with_bilateral_factor(combined.value());
        debug!(
            left = left.value(),
            right = right.value(),
            combined = combined.value(),
            rating = rating.value(),
            "bilateral factor applied"
        );
        rating
    }

    /// Replaces each bilateral pair with its factored rating and combines
    /// the result with the independent ratings.
    ///
    /// Infallible: a [`RatingSet`] only holds validated ratings and pairs.
    pub fn combine_set(&self, set: &RatingSet) -> CombinedRating {
        self.fold(self.resolve(set)).rating
    }

    /// Pairs left/right disabilities of the same site, applies the bilateral
    /// factor to each pair and combines everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_ratings::{Disability, RatingCombiner};
    ///
    /// let disabilities = vec![
    ///     Disability::new("PTSD", 70).unwrap(),
    ///     Disability::new("Lumbar Strain", 20).unwrap(),
    ///     Disability::new("Right Knee Strain", 10).unwrap(),
    ///     Disability::new("Left Knee Strain", 10).unwrap(),
    ///     Disability::new("Tinnitus", 10).unwrap(),
    /// ];
    /// let rating = RatingCombiner::default().combine_disabilities(&disabilities);
    /// assert_eq!(rating.value(), 80);
    /// ```
    pub fn combine_disabilities(&self, disabilities: &[Disability]) -> CombinedRating {
        self.combine_set(&pair_disabilities(disabilities))
    }

    /// Flattens a set into plain ratings, one synthetic rating per pair.
    pub(crate) fn resolve(&self, set: &RatingSet) -> Vec<Rating> {
        set.ratings()
            .iter()
            .copied()
            .chain(set.pairs().iter().map(|p: &BilateralPair| self.apply_pair(p.left(), p.right())))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combine::{CombinerConfig, FoldRounding};

    #[test]
    fn test_bilateral_known_values() {
        let combiner = RatingCombiner::default();
        assert_eq!(combiner.combine_bilateral(20, 10).unwrap().value(), 30);
        assert_eq!(combiner.combine_bilateral(10, 10).unwrap().value(), 20);
        assert_eq!(combiner.combine_bilateral(20, 20).unwrap().value(), 40);
        assert_eq!(combiner.combine_bilateral(30, 30).unwrap().value(), 60);
    }

    #[test]
    fn test_bilateral_is_symmetric() {
        let combiner = RatingCombiner::default();
        for a in (10..=100).step_by(10) {
            for b in (10..=100).step_by(10) {
                assert_eq!(
                    combiner.combine_bilateral(a, b).unwrap(),
                    combiner.combine_bilateral(b, a).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_bilateral_clamps() {
        let combiner = RatingCombiner::default();
        assert_eq!(combiner.combine_bilateral(100, 10).unwrap(), Rating::TOTAL);
        assert_eq!(combiner.combine_bilateral(90, 90).unwrap(), Rating::TOTAL);
    }

    #[test]
    fn test_bilateral_rejects_zero_side() {
        let combiner = RatingCombiner::default();
        assert!(combiner.combine_bilateral(0, 30).unwrap_err().is_invalid_rating());
        assert!(combiner.combine_bilateral(30, 0).unwrap_err().is_invalid_rating());
        assert!(combiner.combine_bilateral(-10, 30).unwrap_err().is_invalid_rating());
    }

    #[test]
    fn test_factor_rounding() {
        assert_eq!(with_bilateral_factor(28).value(), 30);
        // 59 * 1.1 = 64.9
        assert_eq!(with_bilateral_factor(59).value(), 60);
        // 50 * 1.1 = 55.0
        assert_eq!(with_bilateral_factor(50).value(), 60);
        assert_eq!(with_bilateral_factor(0).value(), 0);
    }

    #[test]
    fn test_eager_rounding_rounds_before_factor() {
        let eager = RatingCombiner::new(
            CombinerConfig::default().with_fold_rounding(FoldRounding::NearestTen),
        );
        // 20/20 = 36 -> 40 -> 44 -> 40
        assert_eq!(eager.combine_bilateral(20, 20).unwrap().value(), 40);
        // 30/10 = 37 -> 40 -> 44 -> 40, same as exact 37 * 1.1 = 40.7
        assert_eq!(eager.combine_bilateral(30, 10).unwrap().value(), 40);
    }

    #[test]
    fn test_combine_set() {
        let combiner = RatingCombiner::default();
        let set = RatingSet::from_ratings([70, 20, 10])
            .unwrap()
            .with_pair(BilateralPair::new(10, 10).unwrap());
        // 70, 20, 20 (pair), 10 -> 83 -> 80
        assert_eq!(combiner.combine_set(&set).value(), 80);
        assert_eq!(combiner.resolve(&set).len(), 4);
        assert_eq!(combiner.combine_set(&RatingSet::new()), CombinedRating::ZERO);
    }

    #[test]
    fn test_pair_replaces_originals() {
        let combiner = RatingCombiner::default();
        let paired = RatingSet::new().with_pair(BilateralPair::new(20, 10).unwrap());
        // Pair alone is its factored value, not 20 and 10 folded again.
        assert_eq!(combiner.combine_set(&paired).value(), 30);
    }

    #[test]
    fn test_combine_disabilities_without_pairs() {
        let combiner = RatingCombiner::default();
        let disabilities = vec![
            Disability::new("PTSD", 50).unwrap(),
            Disability::new("Migraines", 30).unwrap(),
        ];
        assert_eq!(combiner.combine_disabilities(&disabilities).value(), 70);
        assert_eq!(combiner.combine_disabilities(&[]), CombinedRating::ZERO);
    }
}
