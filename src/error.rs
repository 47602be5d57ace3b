//! Error type shared by every operation in the crate.

/// Failure raised by rating validation and catalog lookups.
///
/// The combine operations only ever return [`RatingError::InvalidRating`];
/// the catalog variants come from [`crate::schedule`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    /// A percentage outside `[0, 100]`, a non-integer, or a bilateral side
    /// rated 0%.
    #[error("invalid rating {value}: {reason}")]
    InvalidRating { value: String, reason: &'static str },

    /// No catalog entry matches the given condition name.
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    /// The schedule never assigns this level to the condition.
    #[error("{condition} is not rated at {rating}%")]
    UnscheduledLevel { condition: String, rating: u8 },
}

impl RatingError {
    pub(crate) fn invalid(value: impl ToString, reason: &'static str) -> Self {
        RatingError::InvalidRating {
            value: value.to_string(),
            reason,
        }
    }

    /// Returns `true` for [`RatingError::InvalidRating`].
    pub fn is_invalid_rating(&self) -> bool {
        matches!(self, RatingError::InvalidRating { .. })
    }
}
