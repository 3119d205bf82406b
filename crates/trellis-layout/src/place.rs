//! Item placement within resolved cell geometry.
//!
//! Items are centered in their cell span first, then anchor edges are
//! applied from the last edge of the specification backward. Naming both
//! edges of an axis makes the item fill that axis exactly; naming one edge
//! snaps the item to it; naming neither leaves it centered.

use trellis_core::{AnchorEdge, Axis, Rect};

use crate::geometry::GridGeometry;
use crate::item::GridItem;

/// Compute the final rectangle for one item.
///
/// The item's span must lie inside the geometry's track counts; the engine
/// validates this before any placement runs.
pub fn place_item(item: &GridItem, geometry: &GridGeometry) -> Rect {
    let x = geometry.offsets(Axis::Columns);
    let y = geometry.offsets(Axis::Rows);

    let mut width = item.natural.width;
    let mut height = item.natural.height;

    // A negative span switches to fixed-pixel mode: the declared magnitude
    // is the size and the cell is the single adjacent track gap.
    let cellw = if item.span_columns < 0 {
        width = item.span_columns.saturating_neg();
        x[item.column + 1] - x[item.column]
    } else {
        x[item.column + item.span_columns as usize] - x[item.column]
    };
    let cellh = if item.span_rows < 0 {
        height = item.span_rows.saturating_neg();
        y[item.row + 1] - y[item.row]
    } else {
        y[item.row + item.span_rows as usize] - y[item.row]
    };

    // Centre in real coordinates so half-pixel truncation cannot drift the
    // centre by a pixel.
    let dw = f64::from(cellw - width) / 2.0;
    let dh = f64::from(cellh - height) / 2.0;
    let mut comp_x = f64::from(x[item.column]) + dw;
    let mut comp_y = f64::from(y[item.row]) + dh;

    // First move, then grow once the opposite edge appears. Scanning from
    // the end of the specification means the first edge in reading order
    // decides the sizing policy for its axis.
    let mut x_sized = false;
    let mut y_sized = false;
    for &edge in item.anchor.edges().iter().rev() {
        match edge {
            AnchorEdge::Left => {
                comp_x = f64::from(x[item.column]);
                if x_sized {
                    width = cellw;
                }
                x_sized = true;
            }
            AnchorEdge::Right => {
                if x_sized {
                    width = cellw;
                } else {
                    comp_x += dw;
                }
                x_sized = true;
            }
            AnchorEdge::Top => {
                comp_y = f64::from(y[item.row]);
                if y_sized {
                    height = cellh;
                }
                y_sized = true;
            }
            AnchorEdge::Bottom => {
                if y_sized {
                    height = cellh;
                } else {
                    comp_y += dh;
                }
                y_sized = true;
            }
        }
    }

    Rect::new(comp_x as i32, comp_y as i32, width, height)
}
