use std::{fmt, ops::Add, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::Error, near::is_near};

/// Width and height of something, e.g. a box being laid out.
///
/// Values are immutable: every operation returns a new `Size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SizeFields", into = "SizeFields")]
pub struct Size {
    width: f64,
    height: f64,
}

/// Serialized form. Goes through [`Size::of`] when read back
/// so that a stored zero size becomes [`Size::EMPTY`].
#[derive(Serialize, Deserialize)]
struct SizeFields {
    width: f64,
    height: f64,
}

impl From<SizeFields> for Size {
    fn from(f: SizeFields) -> Self {
        Size::of(f.width, f.height)
    }
}

impl From<Size> for SizeFields {
    fn from(s: Size) -> Self {
        SizeFields {
            width: s.width,
            height: s.height,
        }
    }
}

impl Size {
    /// The canonical zero size.
    pub const EMPTY: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size. Returns [`Size::EMPTY`] if both values are zero
    /// (of either sign).
    pub fn of(width: f64, height: f64) -> Size {
        if width == 0.0 && height == 0.0 {
            Size::EMPTY
        } else {
            Size { width, height }
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The product width * height.
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// The smallest size that covers both `self` and `other`.
    pub fn union(&self, other: Size) -> Size {
        Size::of(self.width.max(other.width), self.height.max(other.height))
    }

    /// The largest size that fits in both `self` and `other`.
    pub fn intersect(&self, other: Size) -> Size {
        Size::of(self.width.min(other.width), self.height.min(other.height))
    }

    pub fn plus(&self, other: Size) -> Size {
        Size::of(self.width + other.width, self.height + other.height)
    }

    pub fn plus_width(&self, delta: f64) -> Size {
        Size::of(self.width + delta, self.height)
    }

    pub fn plus_height(&self, delta: f64) -> Size {
        Size::of(self.width, self.height + delta)
    }

    /// Place `other` to the right of `self`.
    /// The widths are added and the height is taken from `other`.
    pub fn plus_horizontal(&self, other: Size) -> Size {
        Size::of(self.width + other.width, other.height)
    }

    /// Place `other` below `self`.
    /// The heights are added and the width is taken from `other`.
    pub fn plus_vertical(&self, other: Size) -> Size {
        Size::of(other.width, self.height + other.height)
    }

    /// Approximate equality: both dimensions must be within
    /// [`NEAR_DELTA`](crate::near::NEAR_DELTA) of each other.
    pub fn nears(&self, other: Size) -> bool {
        is_near(self.width, other.width) && is_near(self.height, other.height)
    }
}

impl Default for Size {
    fn default() -> Self {
        Size::EMPTY
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, other: Size) -> Size {
        self.plus(other)
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Size::of(width, height)
    }
}

impl From<Size> for (f64, f64) {
    fn from(s: Size) -> Self {
        (s.width, s.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = Error;

    /// Parses `"WIDTHxHEIGHT"`, e.g. `"1.2x3.4"`. `X` and `×` work as separators too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(|c: char| c == 'x' || c == 'X' || c == '×')
            .ok_or_else(|| Error::InvalidFormat(s.to_owned()))?;
        let width: f64 = w.trim().parse()?;
        let height: f64 = h.trim().parse()?;
        if !width.is_finite() || !height.is_finite() {
            return Err(Error::NonFinite(s.to_owned()));
        }
        Ok(Size::of(width, height))
    }
}

#[cfg(test)]
mod test {
    use super::Size;
    use crate::{error::Error, near::NEAR_DELTA};

    #[test]
    fn of_keeps_dimensions() {
        let size = Size::of(1.2, 3.4);
        assert_eq!(size.width(), 1.2);
        assert_eq!(size.height(), 3.4);
    }

    #[test]
    fn of_zero_returns_empty() {
        assert_eq!(Size::of(0.0, 0.0), Size::EMPTY);
        let negative = Size::of(-0.0, -0.0);
        assert_eq!(negative.width().to_bits(), Size::EMPTY.width().to_bits());
        assert_eq!(negative.height().to_bits(), Size::EMPTY.height().to_bits());
        assert_eq!(Size::default(), Size::EMPTY);
    }

    #[test]
    fn is_empty_without_width() {
        assert!(Size::of(0.0, 3.4).is_empty());
    }

    #[test]
    fn is_empty_without_height() {
        assert!(Size::of(1.2, 0.0).is_empty());
    }

    #[test]
    fn is_not_empty_with_width_and_height() {
        assert!(!Size::of(1.2, 3.4).is_empty());
    }

    #[test]
    fn union_takes_largest_dimensions() {
        let a = Size::of(1.2, 7.8);
        let b = Size::of(5.6, 3.4);
        assert_eq!(a.union(b), Size::of(5.6, 7.8));
    }

    #[test]
    fn intersect_takes_smallest_dimensions() {
        let a = Size::of(1.2, 7.8);
        let b = Size::of(5.6, 3.4);
        assert_eq!(a.intersect(b), Size::of(1.2, 3.4));
    }

    #[test]
    fn plus_adds_both_dimensions() {
        let a = Size::of(1.2, 3.4);
        let b = Size::of(5.6, 7.8);
        assert_eq!(a.plus(b), Size::of(6.8, 11.2));
        assert_eq!(a + b, Size::of(6.8, 11.2));
    }

    #[test]
    fn plus_width_leaves_height() {
        assert_eq!(Size::of(1.2, 3.4).plus_width(5.6), Size::of(6.8, 3.4));
    }

    #[test]
    fn plus_height_leaves_width() {
        assert_eq!(Size::of(1.2, 3.4).plus_height(7.8), Size::of(1.2, 11.2));
    }

    #[test]
    fn plus_horizontal_takes_other_height() {
        let a = Size::of(1.2, 3.4);
        let b = Size::of(5.6, 7.8);
        assert_eq!(a.plus_horizontal(b), Size::of(6.8, 7.8));
    }

    #[test]
    fn plus_vertical_takes_other_width() {
        let a = Size::of(1.2, 3.4);
        let b = Size::of(5.6, 7.8);
        assert_eq!(a.plus_vertical(b), Size::of(5.6, 11.2));
    }

    #[test]
    fn nears_within_delta() {
        let a = Size::of(1.2, 3.4);
        let b = Size::of(
            a.width() + NEAR_DELTA / 2.0,
            a.height() + NEAR_DELTA / 2.0,
        );
        assert!(a.nears(b));
    }

    #[test]
    fn nears_width_outside_delta() {
        let a = Size::of(1.2, 3.4);
        let b = Size::of(
            a.width() + NEAR_DELTA * 2.0,
            a.height() + NEAR_DELTA / 2.0,
        );
        assert!(!a.nears(b));
    }

    #[test]
    fn nears_height_outside_delta() {
        let a = Size::of(1.2, 3.4);
        let b = Size::of(
            a.width() + NEAR_DELTA / 2.0,
            a.height() + NEAR_DELTA * 2.0,
        );
        assert!(!a.nears(b));
    }

    #[test]
    fn area() {
        assert_eq!(Size::of(2.0, 4.5).area(), 9.0);
    }

    #[test]
    fn parse_and_display() {
        let s: Size = "1.2x3.4".parse().unwrap();
        assert_eq!(s, Size::of(1.2, 3.4));
        assert_eq!(s.to_string(), "1.2x3.4");
        assert_eq!(" 5 X 6 ".parse::<Size>().unwrap(), Size::of(5.0, 6.0));
        assert_eq!("0×0".parse::<Size>().unwrap(), Size::EMPTY);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!("1.2".parse::<Size>(), Err(Error::InvalidFormat(_))));
        assert!(matches!("ax2".parse::<Size>(), Err(Error::InvalidNumber(_))));
        assert!(matches!("NaNx2".parse::<Size>(), Err(Error::NonFinite(_))));
    }

    #[test]
    fn json_format() {
        let json = serde_json::to_string(&Size::of(1.2, 3.4)).unwrap();
        assert_eq!(json, r#"{"width":1.2,"height":3.4}"#);
        let s: Size = serde_json::from_str(r#"{"width":-0.0,"height":0.0}"#).unwrap();
        assert_eq!(s.width().to_bits(), 0.0f64.to_bits());
    }
}
