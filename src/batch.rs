//! Combining many independent subjects at once.
//!
//! Each subject is folded on its own; with the `parallel` feature enabled
//! subjects are spread across the rayon thread pool. A single subject is
//! never split.

use crate::bilateral::RatingSet;
use crate::combine::{CombinedRating, RatingCombiner};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl RatingCombiner {
    /// Combines every subject's rating set.
    ///
    /// Results are in the same order as `subjects`. Sets are validated on
    /// construction, so this cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use combined_ratings::{RatingCombiner, RatingSet};
    ///
    /// let subjects = vec![
    ///     RatingSet::from_ratings([50, 30]).unwrap(),
    ///     RatingSet::from_ratings([10]).unwrap(),
    ///     RatingSet::new(),
    /// ];
    /// let ratings: Vec<u8> = RatingCombiner::default()
    ///     .combine_all(&subjects)
    ///     .into_iter()
    ///     .map(|r| r.value())
    ///     .collect();
    /// assert_eq!(ratings, vec![70, 10, 0]);
    /// ```
    pub fn combine_all(&self, subjects: &[RatingSet]) -> Vec<CombinedRating> {
        #[cfg(feature = "parallel")]
        let subjects = subjects.par_iter();
        #[cfg(not(feature = "parallel"))]
        let subjects = subjects.iter();

        subjects
            .map(|set| self.combine_set(set))
            .collect()
    }
}
