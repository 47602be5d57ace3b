//! Percentage types and rounding rules.

use crate::error::RatingError;
use std::fmt;

/// A validated disability percentage in `[0, 100]`.
///
/// Adjudicated ratings are normally multiples of 10, but intermediate
/// combined values (`44`, `73`, ...) are not, so any integer in range is a
/// valid `Rating`. Use [`CombinedRating`] where the multiple-of-10 invariant
/// matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i64", into = "u8"))]
pub struct Rating(u8);

impl Rating {
    /// 0%: contributes nothing to a combination.
    pub const ZERO: Rating = Rating(0);

    /// 100%: absorbing, nothing can be added to it.
    pub const TOTAL: Rating = Rating(100);

    /// Validates an integer percentage.
    ///
    /// # Errors
    /// [`RatingError::InvalidRating`] if `value` is negative or above 100.
    pub fn new(value: i32) -> Result<Self, RatingError> {
        Self::try_from(i64::from(value))
    }

    /// Wraps a value already known to be in range.
    pub(crate) const fn from_raw(value: u8) -> Self {
        debug_assert!(value <= 100);
        Rating(value)
    }

    /// The percentage as an integer.
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whether the value sits on the `{0, 10, ..., 100}` grid.
    pub const fn is_canonical(self) -> bool {
        self.0 % 10 == 0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(RatingError::invalid(value, "must not be negative"));
        }
        if value > 100 {
            return Err(RatingError::invalid(value, "must not exceed 100"));
        }
        Ok(Rating(value as u8))
    }
}

impl TryFrom<i32> for Rating {
    type Error = RatingError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u32> for Rating {
    type Error = RatingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u8> for Rating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    /// Accepts only finite whole numbers; `12.5` is rejected, not rounded.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(RatingError::invalid(value, "must be a finite number"));
        }
        if value.fract() != 0.0 {
            return Err(RatingError::invalid(value, "must be a whole number"));
        }
        if value < 0.0 {
            return Err(RatingError::invalid(value, "must not be negative"));
        }
        if value > 100.0 {
            return Err(RatingError::invalid(value, "must not exceed 100"));
        }
        Ok(Rating(value as u8))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The official combined rating: always one of `{0, 10, ..., 100}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct CombinedRating(u8);

impl CombinedRating {
    pub const ZERO: CombinedRating = CombinedRating(0);
    pub const TOTAL: CombinedRating = CombinedRating(100);

    /// Rounds a whole-number percentage half-up to the nearest 10.
    pub(crate) const fn round(value: u32) -> Self {
        CombinedRating(round_to_ten(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    /// The same value as a plain [`Rating`].
    pub const fn as_rating(self) -> Rating {
        Rating(self.0)
    }
}

impl TryFrom<u8> for CombinedRating {
    type Error = RatingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 100 || value % 10 != 0 {
            return Err(RatingError::invalid(value, "must be a multiple of 10 in 0..=100"));
        }
        Ok(CombinedRating(value))
    }
}

impl From<CombinedRating> for u8 {
    fn from(rating: CombinedRating) -> u8 {
        rating.0
    }
}

impl From<CombinedRating> for Rating {
    fn from(rating: CombinedRating) -> Rating {
        rating.as_rating()
    }
}

impl fmt::Display for CombinedRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Half-up rounding to a multiple of 10, clamped to 100.
pub(crate) const fn round_to_ten(value: u32) -> u8 {
    let rounded = (value + 5) / 10 * 10;
    if rounded > 100 {
        100
    } else {
        rounded as u8
    }
}

/// Rounds an arbitrary real number to the nearest multiple of 10 in
/// `[0, 100]`.
///
/// Halves round up (`65.0` → 70, `64.9` → 60). `NaN` maps to 0, infinities
/// clamp to the nearest bound. Never fails.
///
/// # Examples
///
/// ```
/// use combined_ratings::normalize;
///
/// assert_eq!(normalize(30.8).value(), 30);
/// assert_eq!(normalize(65.0).value(), 70);
/// assert_eq!(normalize(-4.0).value(), 0);
/// assert_eq!(normalize(140.0).value(), 100);
/// ```
pub fn normalize(raw: f64) -> CombinedRating {
    if raw.is_nan() {
        return CombinedRating::ZERO;
    }
    let tens = (raw / 10.0 + 0.5).floor().clamp(0.0, 10.0);
    CombinedRating(tens as u8 * 10)
}

/// Conversion of caller input into a validated [`Rating`].
///
/// Implemented for [`Rating`] itself, the common integer types and `f64`,
/// so the combine functions accept `&[i32]`, `Vec<Rating>`, `[70.0, 20.0]`
/// and so on.
pub trait IntoRating {
    fn into_rating(self) -> Result<Rating, RatingError>;
}

impl IntoRating for Rating {
    fn into_rating(self) -> Result<Rating, RatingError> {
        Ok(self)
    }
}

impl IntoRating for CombinedRating {
    fn into_rating(self) -> Result<Rating, RatingError> {
        Ok(self.as_rating())
    }
}

macro_rules! impl_into_rating {
    ($($ty:ty),*) => {
        $(
            impl IntoRating for $ty {
                fn into_rating(self) -> Result<Rating, RatingError> {
                    Rating::try_from(self)
                }
            }
        )*
    };
}

impl_into_rating!(i32, i64, u32, u8, f64);

impl<T: IntoRating + Copy> IntoRating for &T {
    fn into_rating(self) -> Result<Rating, RatingError> {
        (*self).into_rating()
    }
}
