//! Geometry primitives for "odd-row shifted" offset hex grids: [`Point`],
//! [`Axial`] and the hex-step distance.
//!
//! Tiles are stored in offset coordinates (column, row) so a map is a plain
//! row-major array. Axial coordinates exist only for the distance formula;
//! adjacency always goes through the fixed row-parity direction tables.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A tile position in offset coordinates. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Offsets of the six hex neighbors of a tile on an even row.
pub const EVEN_ROW_DIRS: [Point; 6] = [
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
];

/// Offsets of the six hex neighbors of a tile on an odd row.
pub const ODD_ROW_DIRS: [Point; 6] = [
    Point::new(0, -1),
    Point::new(1, -1),
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 0),
];

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The six hex neighbours of this tile.
    ///
    /// The direction table is selected by the row parity of `self`; the
    /// neighbours of an odd-row tile lean right, matching the odd-row
    /// shifted layout. Results are not bounds-checked.
    #[inline]
    pub fn neighbors_hex(self) -> [Point; 6] {
        let dirs = if self.y % 2 == 0 {
            &EVEN_ROW_DIRS
        } else {
            &ODD_ROW_DIRS
        };
        dirs.map(|d| self + d)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Axial
// ---------------------------------------------------------------------------

/// A hex position in axial coordinates (q, r).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axial {
    pub q: i32,
    pub r: i32,
}

impl Axial {
    /// Create a new axial coordinate.
    #[inline]
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Convert an offset point (odd-row shifted layout) to axial.
    #[inline]
    pub const fn from_offset(p: Point) -> Self {
        Self {
            q: p.x - (p.y - (p.y & 1)) / 2,
            r: p.y,
        }
    }

    /// Hex-step distance to another axial coordinate.
    #[inline]
    pub const fn distance(self, other: Self) -> i32 {
        let dq = (self.q - other.q).abs();
        let ds = (self.q + self.r - other.q - other.r).abs();
        let dr = (self.r - other.r).abs();
        (dq + ds + dr) / 2
    }
}

impl fmt::Display for Axial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.q, self.r)
    }
}

/// Hex-step distance between two offset points.
///
/// This is the exact number of moves on an unobstructed grid, so it is an
/// admissible A* heuristic whenever every step costs at least 1.
#[inline]
pub const fn hex_distance(a: Point, b: Point) -> i32 {
    Axial::from_offset(a).distance(Axial::from_offset(b))
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn axial_round_trip() {
        let a = Axial::from_offset(Point::new(5, 9));
        let json = serde_json::to_string(&a).unwrap();
        let back: Axial = serde_json::from_str(&json).unwrap();
        assert_eq!(a, back);
    }
}
