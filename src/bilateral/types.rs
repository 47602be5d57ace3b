//! Rating sets, bilateral pairs and labelled disabilities.

use crate::combine::{IntoRating, Rating};
use crate::error::RatingError;
use std::fmt;

/// Side of the body a disability affects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "left" => Some(Side::Left),
            "right" => Some(Side::Right),
            _ => None,
        }
    }
}

/// Paired extremities and joints eligible for the bilateral factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PairedSite {
    Shoulder,
    Elbow,
    Wrist,
    Hand,
    Hip,
    Knee,
    Ankle,
    Foot,
}

impl PairedSite {
    pub const ALL: [PairedSite; 8] = [
        PairedSite::Shoulder,
        PairedSite::Elbow,
        PairedSite::Wrist,
        PairedSite::Hand,
        PairedSite::Hip,
        PairedSite::Knee,
        PairedSite::Ankle,
        PairedSite::Foot,
    ];

    /// Lower-case anatomical name.
    pub fn name(self) -> &'static str {
        match self {
            PairedSite::Shoulder => "shoulder",
            PairedSite::Elbow => "elbow",
            PairedSite::Wrist => "wrist",
            PairedSite::Hand => "hand",
            PairedSite::Hip => "hip",
            PairedSite::Knee => "knee",
            PairedSite::Ankle => "ankle",
            PairedSite::Foot => "foot",
        }
    }

    /// Matches a single word, singular or plural (`"knee"`, `"Knees"`,
    /// `"feet"`).
    pub fn from_word(word: &str) -> Option<Self> {
        let word = word.to_ascii_lowercase();
        if word == "feet" {
            return Some(PairedSite::Foot);
        }
        let singular = word.strip_suffix('s').unwrap_or(&word);
        Self::ALL
            .into_iter()
            .find(|site| site.name() == word || site.name() == singular)
    }
}

impl fmt::Display for PairedSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a disability sits: one side of one paired site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Laterality {
    pub site: PairedSite,
    pub side: Side,
}

impl Laterality {
    pub fn new(site: PairedSite, side: Side) -> Self {
        Self { site, side }
    }

    /// Reads laterality from a condition label such as
    /// `"Right Knee Strain"` or `"left shoulder impingement"`.
    ///
    /// Each "left"/"right" qualifies the next site word, so
    /// `"Left Knee Strain, secondary to right ankle sprain"` is a left knee.
    /// Side words after the last site (`"Knee strain, left"`) qualify that
    /// site. The first qualified site wins. Labels that are already
    /// combined (`"Bilateral ..."`, `"left and right knee"`) return `None`.
    pub fn parse(label: &str) -> Option<Self> {
        let mut found: Vec<Laterality> = Vec::new();
        let mut pending: Vec<Side> = Vec::new();
        let mut last_site = None;
        for word in label
            .split(|c: char| !c.is_ascii_alphabetic())
            .filter(|w| !w.is_empty())
        {
            let lower = word.to_ascii_lowercase();
            if lower == "bilateral" {
                return None;
            }
            if let Some(side) = Side::from_word(&lower) {
                pending.push(side);
            } else if let Some(site) = PairedSite::from_word(&lower) {
                found.extend(pending.drain(..).map(|side| Self::new(site, side)));
                last_site = Some(site);
            }
        }
        if let Some(site) = last_site {
            found.extend(pending.drain(..).map(|side| Self::new(site, side)));
        }

        let first = *found.first()?;
        if found
            .iter()
            .any(|l| l.site == first.site && l.side != first.side)
        {
            return None;
        }
        Some(first)
    }
}

/// Two ratings on paired anatomical structures, both sides rated above 0%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPair"))]
pub struct BilateralPair {
    left: Rating,
    right: Rating,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPair {
    left: Rating,
    right: Rating,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPair> for BilateralPair {
    type Error = RatingError;

    fn try_from(raw: RawPair) -> Result<Self, Self::Error> {
        BilateralPair::new(raw.left, raw.right)
    }
}

impl BilateralPair {
    /// # Errors
    /// [`RatingError::InvalidRating`] if either side is out of range or 0%.
    pub fn new(left: impl IntoRating, right: impl IntoRating) -> Result<Self, RatingError> {
        let left = nonzero(left.into_rating()?)?;
        let right = nonzero(right.into_rating()?)?;
        Ok(Self { left, right })
    }

    pub fn left(&self) -> Rating {
        self.left
    }

    pub fn right(&self) -> Rating {
        self.right
    }
}

pub(crate) fn nonzero(rating: Rating) -> Result<Rating, RatingError> {
    if rating.is_zero() {
        return Err(RatingError::invalid(
            rating.value(),
            "bilateral side must be rated above 0%",
        ));
    }
    Ok(rating)
}

/// The ratings of one subject: independent ratings plus bilateral pairs.
///
/// # Examples
///
/// ```
/// use combined_ratings::{BilateralPair, RatingCombiner, RatingSet};
///
/// let mut set = RatingSet::from_ratings([70, 20, 10]).unwrap();
/// set.push_pair(BilateralPair::new(10, 10).unwrap());
///
/// assert_eq!(RatingCombiner::default().combine_set(&set).value(), 80);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingSet {
    ratings: Vec<Rating>,
    pairs: Vec<BilateralPair>,
}

impl RatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every rating; a single bad value rejects the set.
    pub fn from_ratings<I>(ratings: I) -> Result<Self, RatingError>
    where
        I: IntoIterator,
        I::Item: IntoRating,
    {
        Ok(Self {
            ratings: crate::combine::validate(ratings)?,
            pairs: Vec::new(),
        })
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.ratings.push(rating);
        self
    }

    pub fn with_pair(mut self, pair: BilateralPair) -> Self {
        self.pairs.push(pair);
        self
    }

    pub fn push(&mut self, rating: impl IntoRating) -> Result<(), RatingError> {
        self.ratings.push(rating.into_rating()?);
        Ok(())
    }

    pub fn push_pair(&mut self, pair: BilateralPair) {
        self.pairs.push(pair);
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn pairs(&self) -> &[BilateralPair] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.pairs.is_empty()
    }
}

/// A rated condition with an optional laterality tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Disability {
    pub label: String,
    pub rating: Rating,
    pub laterality: Option<Laterality>,
}

impl Disability {
    /// Creates a disability, reading laterality from the label.
    pub fn new(label: impl Into<String>, rating: impl IntoRating) -> Result<Self, RatingError> {
        let label = label.into();
        let laterality = Laterality::parse(&label);
        Ok(Self {
            label,
            rating: rating.into_rating()?,
            laterality,
        })
    }

    /// Overrides whatever laterality the label implied.
    pub fn with_laterality(mut self, site: PairedSite, side: Side) -> Self {
        self.laterality = Some(Laterality::new(site, side));
        self
    }

    /// Excludes the disability from bilateral pairing.
    pub fn without_laterality(mut self) -> Self {
        self.laterality = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_laterality() {
        assert_eq!(
            Laterality::parse("Right Knee Strain"),
            Some(Laterality::new(PairedSite::Knee, Side::Right))
        );
        assert_eq!(
            Laterality::parse("left shoulder impingement syndrome"),
            Some(Laterality::new(PairedSite::Shoulder, Side::Left))
        );
        assert_eq!(
            Laterality::parse("Plantar fasciitis, left foot"),
            Some(Laterality::new(PairedSite::Foot, Side::Left))
        );
        assert_eq!(
            Laterality::parse("Knee strain, left"),
            Some(Laterality::new(PairedSite::Knee, Side::Left))
        );
    }

    #[test]
    fn test_parse_side_binds_to_following_site() {
        assert_eq!(
            Laterality::parse("Left Knee Strain, secondary to right ankle sprain"),
            Some(Laterality::new(PairedSite::Knee, Side::Left))
        );
        assert_eq!(
            Laterality::parse("Right hip bursitis with left knee pain"),
            Some(Laterality::new(PairedSite::Hip, Side::Right))
        );
        assert_eq!(Laterality::parse("Right and left wrist sprain"), None);
    }

    #[test]
    fn test_parse_rejects_unpaired_labels() {
        assert_eq!(Laterality::parse("PTSD"), None);
        assert_eq!(Laterality::parse("Lumbar Strain"), None);
        assert_eq!(Laterality::parse("Bilateral Plantar Fasciitis"), None);
        assert_eq!(Laterality::parse("Left and right knee strain"), None);
        assert_eq!(Laterality::parse("Right ear hearing loss"), None);
    }

    #[test]
    fn test_site_from_word() {
        assert_eq!(PairedSite::from_word("Knees"), Some(PairedSite::Knee));
        assert_eq!(PairedSite::from_word("feet"), Some(PairedSite::Foot));
        assert_eq!(PairedSite::from_word("hips"), Some(PairedSite::Hip));
        assert_eq!(PairedSite::from_word("spine"), None);
    }

    #[test]
    fn test_pair_requires_both_sides() {
        assert!(BilateralPair::new(20, 10).is_ok());
        assert!(BilateralPair::new(0, 30).unwrap_err().is_invalid_rating());
        assert!(BilateralPair::new(30, 0).unwrap_err().is_invalid_rating());
        assert!(BilateralPair::new(30, 120).unwrap_err().is_invalid_rating());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pair_deserialize_validates() {
        let pair: BilateralPair = serde_json::from_str(r#"{"left":20,"right":10}"#).unwrap();
        assert_eq!(pair.left().value(), 20);
        assert!(serde_json::from_str::<BilateralPair>(r#"{"left":0,"right":10}"#).is_err());
    }

    #[test]
    fn test_rating_set() {
        let mut set = RatingSet::from_ratings([50, 0, 20]).unwrap();
        assert!(!set.is_empty());
        set.push(10).unwrap();
        assert!(set.push(-5).is_err());
        assert_eq!(set.ratings().len(), 4);
        assert!(RatingSet::from_ratings([10, 101]).is_err());
        assert!(RatingSet::new().is_empty());
    }

    #[test]
    fn test_disability_laterality() {
        let knee = Disability::new("Left Knee Strain", 10).unwrap();
        assert_eq!(
            knee.laterality,
            Some(Laterality::new(PairedSite::Knee, Side::Left))
        );
        assert_eq!(knee.clone().without_laterality().laterality, None);

        let custom = Disability::new("Patellofemoral syndrome", 10)
            .unwrap()
            .with_laterality(PairedSite::Knee, Side::Right);
        assert_eq!(custom.laterality.map(|l| l.side), Some(Side::Right));

        assert!(Disability::new("Tinnitus", 110).is_err());
    }
}
