use std::collections::HashMap;

use hexmove_core::Point;

use crate::MoveMap;
use crate::heap::MinHeap;
use crate::map::Node;

impl MoveMap<'_> {
    /// Compute every tile reachable from `from` within `budget`, mapped to
    /// its minimal cost, using a budgeted Dijkstra expansion.
    ///
    /// The start tile is always reported at cost 0. If `from` lies outside
    /// the grid the map is empty.
    ///
    /// Zone-of-control rule: a move from a ZoC tile onto a non-ZoC tile is
    /// forbidden, so a unit may enter zone of control but not continue into
    /// open ground in the same computation. Moves between ZoC tiles and
    /// moves into ZoC stay permitted.
    pub fn dijkstra_reach(&self, from: Point, budget: f64) -> HashMap<Point, f64> {
        let mut reached = HashMap::new();
        let Some(start_idx) = self.idx(from) else {
            return reached;
        };

        let mut nodes = vec![Node::default(); self.len()];
        nodes[start_idx].g = 0.0;

        let mut open = MinHeap::with_capacity(self.len());
        open.push(start_idx, 0.0);

        while let Some(current) = open.pop() {
            let ci = current.idx;
            // A better push has superseded this entry, or the tile is done.
            if current.priority > nodes[ci].g || nodes[ci].closed {
                continue;
            }
            nodes[ci].closed = true;

            let current_g = nodes[ci].g;
            let cp = self.point(ci);
            reached.insert(cp, current_g);

            let from_zoc = self.in_zoc(ci);

            for np in cp.neighbors_hex() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if nodes[ni].closed || self.is_blocked(ni) {
                    continue;
                }
                if from_zoc && !self.in_zoc(ni) {
                    continue;
                }
                let step = self.step_cost(ni);
                if step.is_infinite() {
                    continue;
                }
                let new_cost = current_g + step;
                if new_cost > budget {
                    continue;
                }
                if new_cost < nodes[ni].g {
                    nodes[ni].g = new_cost;
                    open.push(ni, new_cost);
                }
            }
        }

        reached
    }
}
