//! Validated per-call view over the caller's map data.

use std::fmt;

use hexmove_core::{CostTable, Point};

/// Errors reported when the inputs of a query are malformed.
///
/// Search misses (no path, nothing reachable, start outside the grid) are
/// not errors; they come back as `None` or an empty map.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MapError {
    /// Width or height is not strictly positive.
    InvalidDimensions { width: i32, height: i32 },
    /// The terrain array does not hold exactly width × height entries.
    TerrainLength { expected: usize, actual: usize },
    /// A reachability budget below zero (or NaN).
    NegativeBudget(f64),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid map dimensions {width}x{height}")
            }
            Self::TerrainLength { expected, actual } => {
                write!(
                    f,
                    "terrain array holds {actual} entries, expected {expected}"
                )
            }
            Self::NegativeBudget(b) => write!(f, "movement budget {b} is negative"),
        }
    }
}

impl std::error::Error for MapError {}

// ---------------------------------------------------------------------------
// Internal node for the priority-queue searches
// ---------------------------------------------------------------------------

/// Per-tile search state. Allocated fresh for every query and dropped on
/// every exit path.
#[derive(Clone)]
pub(crate) struct Node {
    /// Best-known cost from the start; costs only ever decrease.
    pub(crate) g: f64,
    /// Predecessor tile index, `usize::MAX` for none.
    pub(crate) parent: usize,
    /// Once set the recorded cost is final and the tile is never re-expanded.
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: usize::MAX,
            closed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// MoveMap
// ---------------------------------------------------------------------------

/// An immutable, validated view of one map for the duration of a query:
/// dimensions, terrain ids, movement costs, blocked tiles and an optional
/// zone-of-control overlay.
///
/// Terrain and costs are borrowed from the caller; callers must not mutate
/// them while a query is in flight. The view itself carries no search
/// state, so running several queries against one `MoveMap` from different
/// threads is safe.
pub struct MoveMap<'a> {
    width: i32,
    height: i32,
    terrain: &'a [i32],
    costs: &'a CostTable,
    blocked: Vec<bool>,
    zoc: Option<Vec<bool>>,
}

impl<'a> MoveMap<'a> {
    /// Create a view over `terrain`, which must hold exactly
    /// `width * height` ids in row-major order.
    pub fn new(
        width: i32,
        height: i32,
        terrain: &'a [i32],
        costs: &'a CostTable,
    ) -> Result<Self, MapError> {
        if width <= 0 || height <= 0 {
            return Err(MapError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize;
        if terrain.len() != expected {
            return Err(MapError::TerrainLength {
                expected,
                actual: terrain.len(),
            });
        }
        Ok(Self {
            width,
            height,
            terrain,
            costs,
            blocked: vec![false; expected],
            zoc: None,
        })
    }

    /// Mark tiles as always impassable, independent of terrain.
    /// Coordinates outside the grid are ignored.
    pub fn with_blocked(mut self, tiles: impl IntoIterator<Item = Point>) -> Self {
        for p in tiles {
            if let Some(i) = self.idx(p) {
                self.blocked[i] = true;
            }
        }
        self
    }

    /// Mark tiles as exerting zone of control.
    /// Coordinates outside the grid are ignored.
    pub fn with_zoc(mut self, tiles: impl IntoIterator<Item = Point>) -> Self {
        let len = self.terrain.len();
        let zoc = self.zoc.get_or_insert_with(|| vec![false; len]);
        for p in tiles {
            if p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height {
                zoc[(p.y * self.width + p.x) as usize] = true;
            }
        }
        self
    }

    /// Grid width in tiles.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Grid height in tiles.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of tiles.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.terrain.len()
    }

    /// Convert a point to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.width || p.y < 0 || p.y >= self.height {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Convert a flat index back to a point.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new(idx as i32 % self.width, idx as i32 / self.width)
    }

    #[inline]
    pub(crate) fn is_blocked(&self, idx: usize) -> bool {
        self.blocked[idx]
    }

    /// Effective cost of stepping onto the tile at `idx`. Infinite for
    /// impassable terrain.
    #[inline]
    pub(crate) fn step_cost(&self, idx: usize) -> f64 {
        self.costs.effective(self.terrain[idx])
    }

    #[inline]
    pub(crate) fn in_zoc(&self, idx: usize) -> bool {
        self.zoc.as_ref().is_some_and(|z| z[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_dimensions() {
        let costs = CostTable::new();
        assert_eq!(
            MoveMap::new(0, 3, &[], &costs).err(),
            Some(MapError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            MoveMap::new(3, -1, &[], &costs).err(),
            Some(MapError::InvalidDimensions {
                width: 3,
                height: -1
            })
        );
    }

    #[test]
    fn rejects_wrong_terrain_length() {
        let costs = CostTable::new();
        let terrain = vec![0; 8];
        assert_eq!(
            MoveMap::new(3, 3, &terrain, &costs).err(),
            Some(MapError::TerrainLength {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn idx_point_round_trip() {
        let costs = CostTable::new();
        let terrain = vec![0; 12];
        let map = MoveMap::new(4, 3, &terrain, &costs).unwrap();
        for i in 0..12 {
            assert_eq!(map.idx(map.point(i)), Some(i));
        }
        assert_eq!(map.idx(Point::new(4, 0)), None);
        assert_eq!(map.idx(Point::new(0, 3)), None);
        assert_eq!(map.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn out_of_bounds_markers_are_ignored() {
        let costs = CostTable::new();
        let terrain = vec![0; 9];
        let map = MoveMap::new(3, 3, &terrain, &costs)
            .unwrap()
            .with_blocked([Point::new(1, 1), Point::new(9, 9), Point::new(-1, 2)])
            .with_zoc([Point::new(2, 2), Point::new(3, 3)]);
        assert!(map.is_blocked(4));
        assert!(!map.is_blocked(0));
        assert!(map.in_zoc(8));
        assert!(!map.in_zoc(0));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            MapError::InvalidDimensions {
                width: 0,
                height: 5
            }
            .to_string(),
            "invalid map dimensions 0x5"
        );
        assert_eq!(
            MapError::TerrainLength {
                expected: 9,
                actual: 4
            }
            .to_string(),
            "terrain array holds 4 entries, expected 9"
        );
        assert_eq!(
            MapError::NegativeBudget(-2.0).to_string(),
            "movement budget -2 is negative"
        );
    }
}
