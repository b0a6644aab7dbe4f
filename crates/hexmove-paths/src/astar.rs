use hexmove_core::{Point, hex_distance};

use crate::MoveMap;
use crate::heap::MinHeap;
use crate::map::Node;

impl MoveMap<'_> {
    /// Compute the cheapest path from `from` to `to` using A*.
    ///
    /// Returns the ordered tiles from the one after `from` through `to`
    /// inclusive, or `None` if no path exists. `from == to` yields an empty
    /// path. A `max_cost` of `None` (or any negative value) means
    /// unbounded; otherwise paths whose accumulated cost would exceed it
    /// are pruned.
    ///
    /// The heuristic is the hex-step distance, which never exceeds the true
    /// remaining cost because every step costs at least 1, so returned
    /// paths are cost-minimal.
    pub fn astar_path(&self, from: Point, to: Point, max_cost: Option<f64>) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;
        let budget = max_cost.filter(|c| *c >= 0.0);

        let mut nodes = vec![Node::default(); self.len()];
        nodes[start_idx].g = 0.0;

        let mut open = MinHeap::with_capacity(self.len());
        open.push(start_idx, f64::from(hex_distance(from, to)));

        let found = loop {
            let Some(current) = open.pop() else {
                break false;
            };
            let ci = current.idx;

            if ci == goal_idx {
                break true;
            }
            // Skip stale entries.
            if nodes[ci].closed {
                continue;
            }
            nodes[ci].closed = true;

            let current_g = nodes[ci].g;
            let cp = self.point(ci);

            for np in cp.neighbors_hex() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if nodes[ni].closed || self.is_blocked(ni) {
                    continue;
                }
                let step = self.step_cost(ni);
                if step.is_infinite() {
                    continue;
                }
                let tentative = current_g + step;
                if budget.is_some_and(|b| tentative > b) {
                    continue;
                }
                if tentative < nodes[ni].g {
                    nodes[ni].g = tentative;
                    nodes[ni].parent = ci;
                    open.push(ni, tentative + f64::from(hex_distance(np, to)));
                }
            }
        };

        if !found {
            return None;
        }

        // Walk predecessor links back from the goal; the start is excluded.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(self.point(ci));
            ci = nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}
