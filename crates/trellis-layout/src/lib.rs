//! Grid layout computation for Trellis.
//!
//! This crate computes final track sizes and item rectangles for a design
//! grid: fixed, auto-sized, and size-linked tracks, weighted stretching to
//! an externally imposed size, and per-item cell anchoring.
//!
//! # Pipeline
//!
//! 1. **Track resolution**: content-driven natural sizes, link collapsing
//! 2. **Weighted distribution**: stretch or shrink to the imposed size
//! 3. **Cell geometry**: absolute column/row boundary offsets
//! 4. **Item placement**: center-then-anchor within the cell span
//!
//! Each pass recomputes everything from its inputs; the engine holds no
//! state between passes.
//!
//! # Example
//!
//! ```
//! use trellis_core::Size;
//! use trellis_layout::{compute_layout, Grid, GridItem, LayoutOptions};
//!
//! // Three columns: 120px fixed, auto, linked to column 1. Two rows.
//! let grid = Grid::new(&[120, 0, -1], &[24, 0])?;
//! let items = vec![GridItem::cell(1, 1).measured(Size::new(80, 40))];
//!
//! let (geometry, rects) = compute_layout(
//!     &grid,
//!     &items,
//!     Size::new(400, 120),
//!     LayoutOptions::default(),
//! )?;
//! assert_eq!(rects.len(), 1);
//! assert_eq!(geometry.columns_x.len(), 4);
//! # Ok::<(), trellis_core::ConfigError>(())
//! ```

mod distribute;
mod engine;
mod geometry;
mod grid;
mod item;
mod place;
mod resolve;
mod track;

pub use distribute::{distribute, distribute_clamped};
pub use engine::{
    compute_layout, measure, preferred_size, resolve_and_distribute, LayoutOptions, SizeConstraint,
};
pub use geometry::{track_offsets, GridGeometry};
pub use grid::Grid;
pub use item::GridItem;
pub use place::place_item;
pub use resolve::{content_maxima, natural_sizes};
pub use track::{Track, TrackSize};
