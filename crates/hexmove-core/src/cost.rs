//! Terrain movement costs.
//!
//! A [`CostTable`] maps terrain ids to movement costs. Ids with no override
//! cost 1.0, every effective cost is clamped to at least 1.0, and an
//! override of [`IMPASSABLE`] makes that terrain untraversable.

use std::collections::HashMap;

/// Cost marking a terrain id as untraversable.
pub const IMPASSABLE: f64 = f64::INFINITY;

/// Open mapping from terrain id to movement cost.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTable {
    overrides: HashMap<i32, f64>,
}

impl CostTable {
    /// Create an empty table: every terrain id costs 1.0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from (terrain id, cost) pairs.
    pub fn from_overrides(overrides: impl IntoIterator<Item = (i32, f64)>) -> Self {
        Self {
            overrides: overrides.into_iter().collect(),
        }
    }

    /// Set the cost for a terrain id.
    ///
    /// Values below 1.0 are kept as given and clamped at lookup, so an
    /// override of 0.0 behaves exactly like 1.0.
    pub fn set(&mut self, terrain_id: i32, cost: f64) {
        let _ = self.overrides.insert(terrain_id, cost);
    }

    /// The effective movement cost of a terrain id: the override if any,
    /// 1.0 otherwise, clamped to a minimum of 1.0. Returns [`IMPASSABLE`]
    /// for untraversable terrain.
    #[inline]
    pub fn effective(&self, terrain_id: i32) -> f64 {
        let cost = self
            .overrides
            .get(&terrain_id)
            .copied()
            .unwrap_or(1.0);
        if cost < 1.0 { 1.0 } else { cost }
    }

    /// Whether a terrain id is untraversable.
    #[inline]
    pub fn is_impassable(&self, terrain_id: i32) -> bool {
        self.effective(terrain_id) == IMPASSABLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cost_is_one() {
        let t = CostTable::new();
        assert_eq!(t.effective(0), 1.0);
        assert_eq!(t.effective(42), 1.0);
        assert_eq!(t.effective(-7), 1.0);
    }

    #[test]
    fn overrides_apply() {
        let t = CostTable::from_overrides([(2, 3.5), (7, 2.0)]);
        assert_eq!(t.effective(2), 3.5);
        assert_eq!(t.effective(7), 2.0);
        assert_eq!(t.effective(3), 1.0);
    }

    #[test]
    fn low_overrides_clamp_to_one() {
        let mut t = CostTable::new();
        t.set(1, 0.0);
        t.set(2, -4.0);
        t.set(3, 0.99);
        assert_eq!(t.effective(1), 1.0);
        assert_eq!(t.effective(2), 1.0);
        assert_eq!(t.effective(3), 1.0);
    }

    #[test]
    fn impassable_propagates() {
        let mut t = CostTable::new();
        t.set(9, IMPASSABLE);
        assert!(t.is_impassable(9));
        assert!(t.effective(9).is_infinite());
        assert!(!t.is_impassable(8));
    }

    #[test]
    fn set_replaces_previous_override() {
        let mut t = CostTable::new();
        t.set(4, 5.0);
        t.set(4, 2.0);
        assert_eq!(t.effective(4), 2.0);
    }
}
