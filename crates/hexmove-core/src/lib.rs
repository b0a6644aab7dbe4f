//! **hexmove-core** — hex-grid geometry and movement-cost primitives.
//!
//! This crate provides the foundational types used by the *hexmove* engine:
//! offset and axial coordinates for odd-row shifted hex grids, the
//! hex-step distance, the row-parity neighbor tables, and the terrain
//! [`CostTable`].

pub mod cost;
pub mod geom;

pub use cost::{CostTable, IMPASSABLE};
pub use geom::{Axial, EVEN_ROW_DIRS, ODD_ROW_DIRS, Point, hex_distance};
