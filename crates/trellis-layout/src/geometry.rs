//! Cell geometry: absolute track boundary offsets.

use trellis_core::{Axis, Size};

/// Cumulative boundary offsets for one axis.
///
/// `offsets[i]` is the leading edge of track `i`; the final entry is the
/// trailing edge of the grid. `origin` is the leading inset (padding).
pub fn track_offsets(sizes: &[i32], origin: i32) -> Vec<i32> {
    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut edge = origin;
    offsets.push(edge);
    for &size in sizes {
        edge += size;
        offsets.push(edge);
    }
    offsets
}

/// The column and row boundary coordinates of a fully resolved grid.
///
/// Derived fresh by every pipeline pass. Holding one across a
/// reconfiguration reintroduces exactly the stale-geometry bugs the pure
/// pipeline exists to avoid; hosts that memoize must invalidate on any
/// input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGeometry {
    /// Column boundary x-coordinates, `column_count + 1` entries.
    pub columns_x: Vec<i32>,
    /// Row boundary y-coordinates, `row_count + 1` entries.
    pub rows_y: Vec<i32>,
}

impl GridGeometry {
    /// Bundle per-axis boundary offsets.
    pub fn new(columns_x: Vec<i32>, rows_y: Vec<i32>) -> Self {
        debug_assert!(!columns_x.is_empty() && !rows_y.is_empty());
        Self { columns_x, rows_y }
    }

    /// Boundary offsets along one axis.
    pub fn offsets(&self, axis: Axis) -> &[i32] {
        match axis {
            Axis::Columns => &self.columns_x,
            Axis::Rows => &self.rows_y,
        }
    }

    /// Number of tracks along one axis.
    pub fn track_count(&self, axis: Axis) -> usize {
        self.offsets(axis).len().saturating_sub(1)
    }

    /// Pixel extent of the half-open track span `[start, end)`.
    ///
    /// The span must lie inside the axis; the engine validates item spans
    /// before any geometry is built.
    pub fn span_extent(&self, axis: Axis, start: usize, end: usize) -> i32 {
        let offsets = self.offsets(axis);
        offsets[end] - offsets[start]
    }

    /// Total grid size, excluding the leading origin insets.
    pub fn size(&self) -> Size {
        Size::new(
            self.columns_x[self.columns_x.len() - 1] - self.columns_x[0],
            self.rows_y[self.rows_y.len() - 1] - self.rows_y[0],
        )
    }
}
