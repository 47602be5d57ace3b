//! The published combined ratings table, 38 CFR 4.25 (Table I).
//!
//! Rows are the larger (already combined) value, columns the rating being
//! added, both in steps of 10 from 10 to 90. Values outside that grid have
//! no cell and are combined with the whole-person formula instead.

/// `TABLE[row][col]` holds the combined value of `(row + 1) * 10` and
/// `(col + 1) * 10`.
const TABLE: [[u8; 9]; 9] = [
    [19, 28, 37, 46, 55, 64, 73, 82, 91],
    [28, 36, 44, 52, 60, 68, 76, 84, 92],
    [37, 44, 51, 58, 65, 72, 79, 86, 93],
    [46, 52, 58, 64, 70, 76, 82, 88, 94],
    [55, 60, 65, 70, 75, 80, 85, 90, 95],
    [64, 68, 72, 76, 80, 84, 88, 92, 96],
    [73, 76, 79, 82, 85, 88, 91, 94, 97],
    [82, 84, 86, 88, 90, 92, 94, 96, 98],
    [91, 92, 93, 94, 95, 96, 97, 98, 99],
];

fn index(value: u8) -> Option<usize> {
    if (10..=90).contains(&value) && value % 10 == 0 {
        Some(usize::from(value / 10 - 1))
    } else {
        None
    }
}

/// Looks up the published cell for `combined` and `rating`.
///
/// Returns `None` when either value is off the 10..=90 grid.
pub(crate) fn lookup(combined: u8, rating: u8) -> Option<u8> {
    Some(TABLE[index(combined)?][index(rating)?])
}

/// Whole-person formula: `c + r - c * r / 100`, rounded half-up to an
/// integer.
pub(crate) fn formula(combined: u8, rating: u8) -> u8 {
    let c = u32::from(combined);
    let r = u32::from(rating);
    ((c * 100 + r * (100 - c) + 50) / 100) as u8
}
