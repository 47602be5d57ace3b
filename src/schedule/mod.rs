//! Rating schedule catalog.
//!
//! A read-only catalog of commonly rated conditions: ICD-10 code,
//! examination form and the percentages the schedule assigns. Used to check
//! that an adjudicated percentage is one the schedule can actually produce
//! before it is combined.
//!
//! # References
//!
//! 38 CFR Part 4, Subpart B, "Disability ratings"

mod catalog;

pub use catalog::ScheduledCondition;

use crate::combine::{IntoRating, Rating};
use crate::error::RatingError;
use catalog::CONDITIONS;

impl ScheduledCondition {
    /// Whether the schedule assigns `rating` to this condition.
    pub fn allows(&self, rating: Rating) -> bool {
        self.levels.contains(&rating.value())
    }

    /// Lowest level above 0%, if any.
    pub fn minimum_compensable(&self) -> Option<Rating> {
        self.levels
            .iter()
            .find(|&&l| l > 0)
            .map(|&l| Rating::from_raw(l))
    }
}

/// Every catalog entry.
pub fn catalog() -> &'static [ScheduledCondition] {
    CONDITIONS
}

/// Finds a condition by name, ignoring ASCII case and surrounding
/// whitespace.
pub fn lookup(name: &str) -> Option<&'static ScheduledCondition> {
    let name = name.trim();
    CONDITIONS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Validates a rating against the catalog.
///
/// # Errors
/// - [`RatingError::InvalidRating`] if `rating` is not a valid percentage.
/// - [`RatingError::UnknownCondition`] if `name` is not in the catalog.
/// - [`RatingError::UnscheduledLevel`] if the condition is never rated at
///   that level.
///
/// # Examples
///
/// ```
/// use combined_ratings::schedule;
///
/// assert_eq!(schedule::check("Tinnitus", 10).unwrap().value(), 10);
/// assert!(schedule::check("Tinnitus", 30).is_err());
/// ```
pub fn check(name: &str, rating: impl IntoRating) -> Result<Rating, RatingError> {
    let rating = rating.into_rating()?;
    let condition = lookup(name).ok_or_else(|| RatingError::UnknownCondition(name.to_string()))?;
    if !condition.allows(rating) {
        return Err(RatingError::UnscheduledLevel {
            condition: condition.name.to_string(),
            rating: rating.value(),
        });
    }
    Ok(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        let ptsd = lookup("ptsd").unwrap();
        assert_eq!(ptsd.icd10, "F43.10");
        assert!(lookup("  Lumbar strain ").is_some());
        assert!(lookup("Gout").is_none());
    }

    #[test]
    fn test_allows() {
        let sleep_apnea = lookup("Sleep Apnea").unwrap();
        assert!(sleep_apnea.allows(Rating::new(50).unwrap()));
        assert!(!sleep_apnea.allows(Rating::new(10).unwrap()));
        assert_eq!(sleep_apnea.minimum_compensable().unwrap().value(), 30);
    }

    #[test]
    fn test_check() {
        assert_eq!(check("PTSD", 70).unwrap().value(), 70);
        assert_eq!(
            check("Tinnitus", 20).unwrap_err(),
            RatingError::UnscheduledLevel {
                condition: "Tinnitus".into(),
                rating: 20
            }
        );
        assert_eq!(
            check("Gout", 20).unwrap_err(),
            RatingError::UnknownCondition("Gout".into())
        );
        assert!(check("PTSD", 130).unwrap_err().is_invalid_rating());
    }

    #[test]
    fn test_catalog_not_empty() {
        assert_eq!(catalog().len(), 24);
        assert!(catalog().iter().all(|c| !c.levels.is_empty()));
    }
}
