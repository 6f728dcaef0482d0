use alloc::vec::Vec;

/// Binary indexed tree over row heights: point updates and prefix sums in `O(log n)`.
#[derive(Clone, Debug, Default)]
pub(crate) struct HeightSums {
    // `nodes[k - 1]` holds the rows in `(k - span(k), k]`.
    nodes: Vec<u64>,
    total: u64,
}

impl HeightSums {
    pub(crate) fn from_sizes(sizes: &[u32]) -> Self {
        let running: Vec<u64> = core::iter::once(0)
            .chain(sizes.iter().scan(0u64, |acc, &size| {
                *acc = acc.saturating_add(u64::from(size));
                Some(*acc)
            }))
            .collect();
        let nodes = (1..running.len())
            .map(|k| running[k].saturating_sub(running[k - span(k)]))
            .collect();
        Self {
            nodes,
            total: running.last().copied().unwrap_or(0),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn total(&self) -> u64 {
        self.total
    }

    /// Shifts row `index` by `delta`. Out of range rows are ignored.
    pub(crate) fn add(&mut self, index: usize, delta: i64) {
        let len = self.len();
        if index >= len || delta == 0 {
            return;
        }
        self.total = shifted(self.total, delta);
        let mut k = index + 1;
        while k <= len {
            self.nodes[k - 1] = shifted(self.nodes[k - 1], delta);
            k += span(k);
        }
    }

    /// Height of the first `count` rows.
    pub(crate) fn prefix_sum(&self, count: usize) -> u64 {
        let mut k = count.min(self.len());
        let mut sum = 0u64;
        while k > 0 {
            sum = sum.saturating_add(self.nodes[k - 1]);
            k -= span(k);
        }
        sum
    }

    /// Largest `count` with `prefix_sum(count) <= offset`.
    ///
    /// Zero-height rows ahead of `offset` are counted, so the row at `count` is the first one
    /// that actually covers `offset` (or `len()` past the end).
    pub(crate) fn lower_bound(&self, offset: u64) -> usize {
        let len = self.len();
        if len == 0 {
            return 0;
        }
        let mut step = 1usize << (usize::BITS - 1 - len.leading_zeros());
        let mut count = 0usize;
        let mut remaining = offset;
        while step > 0 {
            let next = count + step;
            if next <= len && self.nodes[next - 1] <= remaining {
                remaining -= self.nodes[next - 1];
                count = next;
            }
            step >>= 1;
        }
        count
    }
}

fn span(k: usize) -> usize {
    k & k.wrapping_neg()
}

fn shifted(value: u64, delta: i64) -> u64 {
    if delta < 0 {
        value.saturating_sub(delta.unsigned_abs())
    } else {
        value.saturating_add(delta.unsigned_abs())
    }
}
