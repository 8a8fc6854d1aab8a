//! Planar integer coordinates and Euclidean distance.
//!
//! Cities sit on an integer grid bounded by [`COORD_MIN`]..=[`COORD_MAX`] on
//! both axes.  Distances are `f64` so that road lengths and path totals carry
//! no rounding beyond the square root itself.

/// Smallest coordinate a generated city can have on either axis.
pub const COORD_MIN: i32 = -100;

/// Largest coordinate a generated city can have on either axis.
pub const COORD_MAX: i32 = 100;

/// A point on the integer grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Coord) -> f64 {
        (self.distance_2(other) as f64).sqrt()
    }

    /// Squared Euclidean distance, exact in integer arithmetic.
    #[inline]
    pub fn distance_2(self, other: Coord) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// `true` if both axes lie within the generation bounds.
    #[inline]
    pub fn in_bounds(self) -> bool {
        (COORD_MIN..=COORD_MAX).contains(&self.x) && (COORD_MIN..=COORD_MAX).contains(&self.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
