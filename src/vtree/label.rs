//! Label allocation and the hierarchical relabeling procedure.
//!
//! This is the order-maintenance core: assigning a dense integer label to a
//! newly spliced event so that label comparison alone answers precedence
//! queries, and redistributing labels — locally, or across the whole space —
//! when there's no room left between two neighbours.

use super::event::NONE;
use super::VersionTree;

impl VersionTree {
    /// Give `idx` a label strictly between its linked-list neighbours,
    /// relabeling (and, if that's not enough, growing) until there's room.
    ///
    /// A `grow` triggered along the way walks and relabels the *entire*
    /// event list, `idx` included, since `idx` is already linked in by the
    /// time this runs. Check for that before trying to carve out a gap.
    pub(super) fn assign_label(&mut self, idx: usize) {
        loop {
            if self.label_to_event[self.events[idx].label] == Some(idx) {
                return;
            }

            let left = self.events[self.events[idx].prev.expect("spliced event has a predecessor")].label;
            let right = self.events[self.events[idx]
                .next
                .expect("only the root's close event has no successor, and it is never re-spliced")]
            .label;

            if right - left >= 2 {
                let label = left + (right - left + 1) / 2;
                self.events[idx].label = label;
                self.label_to_event[label] = Some(idx);
                return;
            }

            self.relabel(left, right);
        }
    }

    /// Find the smallest window containing `[l, r]` whose density is below
    /// threshold and spread its occupants out evenly; grow the whole label
    /// space if no such window exists.
    pub(super) fn relabel(&mut self, l: usize, r: usize) {
        let mut window = 2usize;
        while window <= self.capacity {
            if l / window == r / window {
                let lo = (l / window) * window;
                let hi = lo + window;
                let occupied: Vec<usize> = (lo..hi)
                    .filter_map(|label| self.label_to_event[label])
                    .collect();
                let density = occupied.len() as f64 / window as f64;
                if density < self.config.overflow_constant.powf(-(window as f64)) {
                    self.redistribute(&occupied, lo, hi);
                    return;
                }
            }
            window *= 2;
        }
        self.grow();
    }

    /// Spread `occupied`'s events evenly across `[lo, hi)`.
    ///
    /// If this window reaches the top of the label space, its last slot is
    /// the permanent right sentinel (the root's close event): it is pinned
    /// in place rather than respaced along with everything else.
    fn redistribute(&mut self, occupied: &[usize], lo: usize, hi: usize) {
        for label in lo..hi {
            self.label_to_event[label] = None;
        }

        if hi == self.capacity {
            let root_close = occupied
                .iter()
                .copied()
                .find(|&idx| self.events[idx].key == NONE)
                .expect("a window reaching the label space's top always contains the sentinel");
            let movable: Vec<usize> = occupied
                .iter()
                .copied()
                .filter(|&idx| idx != root_close)
                .collect();

            let window_size = hi - 1 - lo;
            let n = movable.len().max(1);
            for (i, &idx) in movable.iter().enumerate() {
                let label = lo + (i * window_size) / n;
                self.events[idx].label = label;
                self.label_to_event[label] = Some(idx);
            }
            self.events[root_close].label = hi - 1;
            self.label_to_event[hi - 1] = Some(root_close);
            return;
        }

        let window_size = hi - lo;
        let n = occupied.len().max(1);
        for (i, &idx) in occupied.iter().enumerate() {
            let label = lo + (i * window_size) / n;
            self.events[idx].label = label;
            self.label_to_event[label] = Some(idx);
        }
    }

    /// Double the label space and spread every registered event out evenly,
    /// re-pinning the root's close event to the new top slot — the right
    /// sentinel, reserved for `NONE` per the event list's invariant.
    pub(super) fn grow(&mut self) {
        let new_capacity = self.capacity * 2;

        let mut ordered = Vec::with_capacity(self.events.len());
        let mut cur = Some(self.root_open);
        while let Some(idx) = cur {
            ordered.push(idx);
            cur = self.events[idx].next;
        }
        let root_close = *ordered
            .last()
            .expect("the root's open event is always present");
        let others = &ordered[..ordered.len() - 1];

        let k = others.len().max(1);
        let mut label_to_event = vec![None; new_capacity];
        for (i, &idx) in others.iter().enumerate() {
            let label = (i * (new_capacity - 1)) / k;
            self.events[idx].label = label;
            label_to_event[label] = Some(idx);
        }
        self.events[root_close].label = new_capacity - 1;
        label_to_event[new_capacity - 1] = Some(root_close);

        tracing::debug!(
            old_capacity = self.capacity,
            new_capacity,
            events = ordered.len(),
            "vtree: grew label space"
        );
        self.capacity = new_capacity;
        self.label_to_event = label_to_event;
    }
}
