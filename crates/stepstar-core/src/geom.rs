//! Cell coordinates.
//!
//! A [`Coord`] addresses a cell by `(row, col)`, both 0-indexed. Rows grow
//! downwards and columns grow to the right, matching how the grid is drawn.

use std::fmt;
use std::ops::{Add, Sub};

/// A 2D integer cell coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// Orthogonal offsets in neighbor order: up, down, left, right.
pub const CARDINALS: [Coord; 4] = [
    Coord::new(-1, 0),
    Coord::new(1, 0),
    Coord::new(0, -1),
    Coord::new(0, 1),
];

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours, in [`CARDINALS`] order.
    ///
    /// Some of them may lie outside any particular grid.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn neighbors_order_is_up_down_left_right() {
        let n = Coord::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Coord::new(1, 2),
                Coord::new(3, 2),
                Coord::new(2, 1),
                Coord::new(2, 3),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(4, 4);
        assert!(c.is_adjacent(Coord::new(4, 5)));
        assert!(c.is_adjacent(Coord::new(3, 4)));
        assert!(!c.is_adjacent(Coord::new(5, 5)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn display_and_from_tuple() {
        let c: Coord = (3, 7).into();
        assert_eq!(c, Coord::new(3, 7));
        assert_eq!(c.to_string(), "(3, 7)");
    }
}
