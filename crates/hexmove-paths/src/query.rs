//! Plain-argument boundary functions.
//!
//! These are the call-in/result-out entry points for hosts that hand over
//! raw map data per request: they validate the inputs, build a transient
//! [`MoveMap`] and run one search. Callers issuing several queries against
//! the same map should build the [`MoveMap`] once instead.

use std::collections::HashMap;

use hexmove_core::{CostTable, Point};

use crate::map::{MapError, MoveMap};

/// Compute the cheapest path from `start` to `goal`.
///
/// `terrain` holds one terrain id per tile in row-major order. Blocked
/// coordinates outside the grid are ignored. `max_cost` of `None` or a
/// negative value means unbounded.
///
/// Returns `Ok(None)` when no path exists (including endpoints outside the
/// grid); `Err` only for malformed inputs.
#[allow(clippy::too_many_arguments)]
pub fn find_path(
    width: i32,
    height: i32,
    terrain: &[i32],
    costs: &CostTable,
    start: Point,
    goal: Point,
    blocked: &[Point],
    max_cost: Option<f64>,
) -> Result<Option<Vec<Point>>, MapError> {
    let map = MoveMap::new(width, height, terrain, costs)?.with_blocked(blocked.iter().copied());
    Ok(map.astar_path(start, goal, max_cost))
}

/// Compute every tile reachable from `start` within `max_cost`, mapped to
/// its minimal cost.
///
/// `max_cost` must be non-negative. Blocked and ZoC coordinates outside
/// the grid are ignored. A `start` outside the grid yields an empty map.
#[allow(clippy::too_many_arguments)]
pub fn find_reachable(
    width: i32,
    height: i32,
    terrain: &[i32],
    costs: &CostTable,
    start: Point,
    blocked: &[Point],
    max_cost: f64,
    zoc: Option<&[Point]>,
) -> Result<HashMap<Point, f64>, MapError> {
    if max_cost.is_nan() || max_cost < 0.0 {
        return Err(MapError::NegativeBudget(max_cost));
    }
    let mut map =
        MoveMap::new(width, height, terrain, costs)?.with_blocked(blocked.iter().copied());
    if let Some(tiles) = zoc {
        map = map.with_zoc(tiles.iter().copied());
    }
    Ok(map.dijkstra_reach(start, max_cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_path_validates_inputs() {
        let costs = CostTable::new();
        assert_eq!(
            find_path(
                0,
                3,
                &[],
                &costs,
                Point::ZERO,
                Point::ZERO,
                &[],
                None
            ),
            Err(MapError::InvalidDimensions {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            find_path(
                3,
                3,
                &[0; 5],
                &costs,
                Point::ZERO,
                Point::ZERO,
                &[],
                None
            ),
            Err(MapError::TerrainLength {
                expected: 9,
                actual: 5
            })
        );
    }

    #[test]
    fn find_path_reports_misses_as_ok_none() {
        let costs = CostTable::new();
        let terrain = [0; 9];
        // Start outside the grid is a miss, not an error.
        let res = find_path(
            3,
            3,
            &terrain,
            &costs,
            Point::new(7, 7),
            Point::new(2, 2),
            &[],
            None,
        );
        assert_eq!(res, Ok(None));
    }

    #[test]
    fn find_path_end_to_end() {
        let costs = CostTable::new();
        let terrain = [0; 9];
        let path = find_path(
            3,
            3,
            &terrain,
            &costs,
            Point::new(0, 0),
            Point::new(2, 2),
            &[Point::new(1, 1)],
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(path.last(), Some(&Point::new(2, 2)));
        assert!(!path.contains(&Point::new(1, 1)));
    }

    #[test]
    fn find_reachable_rejects_negative_budget() {
        let costs = CostTable::new();
        let terrain = [0; 9];
        assert_eq!(
            find_reachable(3, 3, &terrain, &costs, Point::ZERO, &[], -1.0, None),
            Err(MapError::NegativeBudget(-1.0))
        );
        assert!(matches!(
            find_reachable(3, 3, &terrain, &costs, Point::ZERO, &[], f64::NAN, None),
            Err(MapError::NegativeBudget(_))
        ));
    }

    #[test]
    fn find_reachable_end_to_end() {
        let costs = CostTable::new();
        let terrain = [0; 9];
        let reached = find_reachable(
            3,
            3,
            &terrain,
            &costs,
            Point::new(1, 1),
            &[Point::new(2, 1)],
            1.0,
            Some(&[Point::new(1, 0)]),
        )
        .unwrap();
        // Start plus its unblocked neighbors; the ZoC tile is still entered.
        assert_eq!(reached[&Point::new(1, 1)], 0.0);
        assert_eq!(reached[&Point::new(1, 0)], 1.0);
        assert!(!reached.contains_key(&Point::new(2, 1)));
        assert_eq!(reached.len(), 6);
    }
}
