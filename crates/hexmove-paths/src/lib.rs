//! Movement queries for hex-grid tactical maps.
//!
//! This crate answers two questions about a terrain map:
//!
//! - the cheapest path between two tiles ([`find_path`] /
//!   [`MoveMap::astar_path`]), via **A\*** with the hex-step distance as
//!   heuristic;
//! - every tile reachable within a movement budget and its minimal cost
//!   ([`find_reachable`] / [`MoveMap::dijkstra_reach`]), via budgeted
//!   **Dijkstra** honoring a zone-of-control stop-on-enter rule.
//!
//! The grid is an odd-row shifted offset hex layout; geometry and terrain
//! costs come from [`hexmove_core`]. Each query validates its inputs,
//! allocates transient search buffers and returns a plain value — no state
//! persists between calls, and search misses are ordinary results
//! (`None` / an empty map), never errors.

mod astar;
mod dijkstra;
mod heap;
mod map;
mod query;

pub use map::{MapError, MoveMap};
pub use query::{find_path, find_reachable};
