//! Combine many sizes into one, e.g. when stacking boxes.

use crate::coords::Size;

/// Size of the given sizes placed side by side, left to right.
/// The resulting height is that of the last size.
pub fn row(sizes: impl IntoIterator<Item = Size>) -> Size {
    sizes
        .into_iter()
        .fold(Size::EMPTY, |acc, s| acc.plus_horizontal(s))
}

/// Size of the given sizes stacked top to bottom.
/// The resulting width is that of the last size.
pub fn column(sizes: impl IntoIterator<Item = Size>) -> Size {
    sizes
        .into_iter()
        .fold(Size::EMPTY, |acc, s| acc.plus_vertical(s))
}

/// Smallest size that covers all the given sizes.
pub fn bounding(sizes: impl IntoIterator<Item = Size>) -> Size {
    sizes.into_iter().fold(Size::EMPTY, |acc, s| acc.union(s))
}

/// Largest size that fits in all the given sizes.
/// Returns None if there are no sizes.
pub fn common(sizes: impl IntoIterator<Item = Size>) -> Option<Size> {
    sizes.into_iter().reduce(|acc, s| acc.intersect(s))
}

/// Component-wise sum of all sizes.
pub fn total(sizes: impl IntoIterator<Item = Size>) -> Size {
    sizes.into_iter().fold(Size::EMPTY, |acc, s| acc + s)
}
