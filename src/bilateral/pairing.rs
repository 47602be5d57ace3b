//! Grouping labelled disabilities into bilateral pairs.

use super::types::{BilateralPair, Disability, PairedSite, RatingSet, Side};
use tracing::debug;

/// Builds a [`RatingSet`] from labelled disabilities.
///
/// For each paired site, left and right entries are matched in input order
/// (first left with first right, and so on). Matched entries become
/// [`BilateralPair`]s; everything else, including 0% sides and sites rated
/// on one side only, stays an ordinary rating. Entries are removed by
/// position, so two unrelated disabilities sharing a percentage are never
/// confused.
pub fn pair_disabilities(disabilities: &[Disability]) -> RatingSet {
    let mut paired = vec![false; disabilities.len()];
    let mut set = RatingSet::new();

    for site in PairedSite::ALL {
        for (l, r) in side_indices(disabilities, site, Side::Left)
            .zip(side_indices(disabilities, site, Side::Right))
        {
            // Both sides are non-zero and already validated.
            if let Ok(pair) = BilateralPair::new(disabilities[l].rating, disabilities[r].rating) {
                debug!(
                    %site,
                    left = %disabilities[l].label,
                    right = %disabilities[r].label,
                    "bilateral pair"
                );
                paired[l] = true;
                paired[r] = true;
                set.push_pair(pair);
            }
        }
    }

    disabilities
        .iter()
        .zip(&paired)
        .filter(|&(_, &is_paired)| !is_paired)
        .fold(set, |set, (d, _)| set.with_rating(d.rating))
}

/// Positions of rated entries on one side of `site`, in input order.
fn side_indices(
    disabilities: &[Disability],
    site: PairedSite,
    side: Side,
) -> impl Iterator<Item = usize> + '_ {
    disabilities
        .iter()
        .enumerate()
        .filter(move |(_, d)| {
            !d.rating.is_zero() && d.laterality.is_some_and(|l| l.site == site && l.side == side)
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disability(label: &str, rating: i32) -> Disability {
        Disability::new(label, rating).unwrap()
    }

    #[test]
    fn test_pairs_matching_sites() {
        let set = pair_disabilities(&[
            disability("PTSD", 70),
            disability("Right Knee Strain", 10),
            disability("Left Knee Strain", 20),
            disability("Tinnitus", 10),
        ]);
        assert_eq!(set.pairs().len(), 1);
        assert_eq!(set.pairs()[0].left().value(), 20);
        assert_eq!(set.pairs()[0].right().value(), 10);
        let rest: Vec<u8> = set.ratings().iter().map(|r| r.value()).collect();
        assert_eq!(rest, vec![70, 10]);
    }

    #[test]
    fn test_removes_by_position_not_value() {
        // Tinnitus shares 10% with both knees and must survive pairing.
        let set = pair_disabilities(&[
            disability("Right Knee Strain", 10),
            disability("Left Knee Strain", 10),
            disability("Tinnitus", 10),
        ]);
        assert_eq!(set.pairs().len(), 1);
        assert_eq!(set.ratings().len(), 1);
        assert_eq!(set.ratings()[0].value(), 10);
    }

    #[test]
    fn test_single_side_stays_unpaired() {
        let set = pair_disabilities(&[
            disability("Right Shoulder Strain", 20),
            disability("Left Knee Strain", 10),
        ]);
        assert!(set.pairs().is_empty());
        assert_eq!(set.ratings().len(), 2);
    }

    #[test]
    fn test_zero_side_is_not_paired() {
        let set = pair_disabilities(&[
            disability("Right Knee Strain", 0),
            disability("Left Knee Strain", 20),
        ]);
        assert!(set.pairs().is_empty());
        assert_eq!(set.ratings().len(), 2);
    }

    #[test]
    fn test_secondary_site_in_label_does_not_block_pairing() {
        let set = pair_disabilities(&[
            disability("Left Knee Strain, secondary to right ankle sprain", 30),
            disability("Right Knee Strain", 30),
        ]);
        assert_eq!(set.pairs().len(), 1);
        assert!(set.ratings().is_empty());
        // 30/30 = 51, 51 * 1.1 = 56.1 -> 60
        let rating = crate::combine::RatingCombiner::default().combine_set(&set);
        assert_eq!(rating.value(), 60);
    }

    #[test]
    fn test_multiple_sites_and_leftovers() {
        let set = pair_disabilities(&[
            disability("Left Knee Strain", 10),
            disability("Right Shoulder Strain", 20),
            disability("Right Knee Strain", 10),
            disability("Left Shoulder Strain", 10),
            disability("Left Knee instability", 30),
        ]);
        assert_eq!(set.pairs().len(), 2);
        // Second left knee has no right partner.
        assert_eq!(set.ratings().len(), 1);
        assert_eq!(set.ratings()[0].value(), 30);
    }
}
