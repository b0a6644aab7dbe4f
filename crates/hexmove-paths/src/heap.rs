//! Array-backed binary min-heap used as the open list of both searches.
//!
//! There is no decrease-key: when a better cost is found for a tile, a new
//! entry is pushed and the stale one is discarded at pop time by the search
//! itself. The backing `Vec` grows on demand, so duplicate pushes can never
//! overflow a fixed capacity.

/// An open-list entry: a flat tile index and its queue priority.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Entry {
    pub(crate) idx: usize,
    pub(crate) priority: f64,
}

pub(crate) struct MinHeap {
    entries: Vec<Entry>,
}

impl MinHeap {
    /// Create a heap with room for `capacity` entries before growing.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Push an entry. O(log n).
    pub(crate) fn push(&mut self, idx: usize, priority: f64) {
        self.entries.push(Entry { idx, priority });
        self.sift_up(self.entries.len() - 1);
    }

    /// Pop the minimum-priority entry. O(log n).
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        if self.entries.is_empty() {
            return None;
        }
        let root = self.entries.swap_remove(0);
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.entries[a]
            .priority
            .total_cmp(&self.entries[b].priority)
            .is_lt()
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.entries.len() && self.less(left, smallest) {
                smallest = left;
            }
            if right < self.entries.len() && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}
