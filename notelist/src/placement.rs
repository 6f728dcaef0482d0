use alloc::vec::Vec;

use crate::sums::HeightSums;
use crate::{NoteSource, RowController};

/// The container side of layout: where each row sits.
///
/// Holds the `display_size` of every row in a prefix-sum index so the host can place rows,
/// size its scroll area, and hit-test the pointer (for hover) in `O(log n)`. Rebuild it after
/// the model changes shape; refresh single rows on [`crate::RowHost::geometry_changed`].
#[derive(Clone, Debug, Default)]
pub struct RowPlacement {
    sizes: Vec<u32>,
    sums: HeightSums,
}

impl RowPlacement {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-queries every row.
    pub fn rebuild<S: NoteSource + ?Sized>(&mut self, controller: &RowController, source: &S) {
        self.sizes = (0..source.row_count())
            .map(|i| controller.display_size(source, i))
            .collect();
        self.sums = HeightSums::from_sizes(&self.sizes);
        ntrace!(rows = self.sizes.len(), total = self.sums.total(), "RowPlacement::rebuild");
    }

    /// Re-queries one row. Returns the height delta.
    pub fn refresh_row<S: NoteSource + ?Sized>(
        &mut self,
        controller: &RowController,
        source: &S,
        index: usize,
    ) -> i64 {
        let size = controller.display_size(source, index);
        self.set_row_size(index, size)
    }

    /// Returns the height delta; `0` for out-of-range rows.
    pub fn set_row_size(&mut self, index: usize, size: u32) -> i64 {
        let Some(cur) = self.sizes.get_mut(index) else {
            nwarn!(index, rows = self.sums.len(), "set_row_size: out of range");
            return 0;
        };
        let delta = i64::from(size) - i64::from(*cur);
        if delta != 0 {
            *cur = size;
            self.sums.add(index, delta);
        }
        delta
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn total_height(&self) -> u64 {
        self.sums.total()
    }

    pub fn row_size(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    pub fn row_start(&self, index: usize) -> Option<u64> {
        if index >= self.sizes.len() {
            return None;
        }
        Some(self.sums.prefix_sum(index))
    }

    pub fn row_end(&self, index: usize) -> Option<u64> {
        let start = self.row_start(index)?;
        Some(start + u64::from(self.sizes[index]))
    }

    /// The row under vertical offset `offset`, clamped to the last row.
    pub fn row_at_offset(&self, offset: u64) -> Option<usize> {
        if self.sizes.is_empty() {
            return None;
        }
        Some(self.sums.lower_bound(offset).min(self.sizes.len() - 1))
    }
}
