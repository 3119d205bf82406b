//! The layout pipeline: resolve, distribute, build offsets, place.
//!
//! Every entry point is a pure function of its arguments. A pass either
//! fails fast with a [`ConfigError`] before producing anything, or returns
//! fully resolved geometry.

use log::debug;
use trellis_core::{Axis, ConfigError, Rect, Size};

use crate::distribute::distribute;
use crate::geometry::{track_offsets, GridGeometry};
use crate::grid::Grid;
use crate::item::GridItem;
use crate::place;
use crate::resolve::{content_maxima, natural_sizes};

/// Per-pass options supplied by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Leading inset of the first column boundary (left padding).
    pub origin_x: i32,
    /// Leading inset of the first row boundary (top padding).
    pub origin_y: i32,
}

/// One dimension of an externally imposed size negotiation.
///
/// Mirrors the measure protocol of retained-mode toolkits: a parent either
/// dictates a size, caps it, or leaves it open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeConstraint {
    /// The host dictates this exact size.
    Exactly(i32),
    /// The content-preferred size is used unless it exceeds this cap.
    AtMost(i32),
    /// The content-preferred size is used as-is.
    Unspecified,
}

impl SizeConstraint {
    /// Negotiate a final size from the content-preferred one.
    pub fn fit(&self, preferred: i32) -> i32 {
        match *self {
            SizeConstraint::Exactly(imposed) => imposed,
            SizeConstraint::AtMost(cap) if preferred > cap => cap,
            SizeConstraint::AtMost(_) | SizeConstraint::Unspecified => preferred,
        }
    }
}

fn validate_spans(grid: &Grid, items: &[GridItem], axis: Axis) -> Result<(), ConfigError> {
    let count = grid.track_count(axis);
    for item in items {
        let start = item.start(axis);
        let end = start + item.tracks_occupied(axis);
        if start >= count || end > count {
            return Err(ConfigError::CellOutOfRange {
                axis,
                start,
                end,
                count,
            });
        }
    }
    Ok(())
}

fn axis_natural(grid: &Grid, items: &[GridItem], axis: Axis) -> Result<Vec<i32>, ConfigError> {
    let tracks = grid.tracks(axis);
    let content = content_maxima(axis, items, tracks.len());
    natural_sizes(axis, tracks, &content)
}

/// Content-preferred grid size before any distribution.
pub fn preferred_size(grid: &Grid, items: &[GridItem]) -> Result<Size, ConfigError> {
    validate_spans(grid, items, Axis::Columns)?;
    validate_spans(grid, items, Axis::Rows)?;
    let widths = axis_natural(grid, items, Axis::Columns)?;
    let heights = axis_natural(grid, items, Axis::Rows)?;
    Ok(Size::new(widths.iter().sum(), heights.iter().sum()))
}

/// Negotiate the grid's measured size against host constraints.
pub fn measure(
    grid: &Grid,
    items: &[GridItem],
    width: SizeConstraint,
    height: SizeConstraint,
) -> Result<Size, ConfigError> {
    let preferred = preferred_size(grid, items)?;
    let measured = Size::new(width.fit(preferred.width), height.fit(preferred.height));
    debug!(
        "measure: preferred {}x{}, negotiated {}x{}",
        preferred.width, preferred.height, measured.width, measured.height
    );
    Ok(measured)
}

fn axis_offsets(
    grid: &Grid,
    items: &[GridItem],
    axis: Axis,
    desired_total: i32,
    origin: i32,
) -> Result<Vec<i32>, ConfigError> {
    let natural = axis_natural(grid, items, axis)?;
    let final_sizes = distribute(
        &natural,
        &grid.weights(axis),
        grid.weight_sum(axis),
        desired_total,
    );
    Ok(track_offsets(&final_sizes, origin))
}

/// Run the full pipeline and return the grid's boundary coordinates.
///
/// Every output is recomputed from the inputs; nothing from a previous
/// pass can leak in.
pub fn resolve_and_distribute(
    grid: &Grid,
    items: &[GridItem],
    imposed: Size,
    options: LayoutOptions,
) -> Result<GridGeometry, ConfigError> {
    validate_spans(grid, items, Axis::Columns)?;
    validate_spans(grid, items, Axis::Rows)?;

    debug!("layout pass: imposed {}x{}", imposed.width, imposed.height);

    let columns_x = axis_offsets(grid, items, Axis::Columns, imposed.width, options.origin_x)?;
    let rows_y = axis_offsets(grid, items, Axis::Rows, imposed.height, options.origin_y)?;

    Ok(GridGeometry::new(columns_x, rows_y))
}

/// Run the pipeline and place every item.
///
/// Rectangles are returned in item order. The host is responsible for
/// re-measuring items at their final size if their rendering depends on it.
pub fn compute_layout(
    grid: &Grid,
    items: &[GridItem],
    imposed: Size,
    options: LayoutOptions,
) -> Result<(GridGeometry, Vec<Rect>), ConfigError> {
    let geometry = resolve_and_distribute(grid, items, imposed, options)?;
    let rects = items
        .iter()
        .map(|item| place::place_item(item, &geometry))
        .collect();
    Ok((geometry, rects))
}
