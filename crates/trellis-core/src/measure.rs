//! Host-side measurement capability.
//!
//! The engine never depends on a concrete widget type. Anything that can
//! report an unconstrained natural size and a visibility flag can occupy a
//! grid cell; the host measures items before invoking a layout pass.

use crate::types::Size;

/// Capability implemented by host item types.
pub trait Measure {
    /// Natural (unconstrained) width in pixels.
    fn natural_width(&self) -> i32;

    /// Natural (unconstrained) height in pixels.
    fn natural_height(&self) -> i32;

    /// Whether the item contributes to track sizing. Invisible items
    /// contribute zero but still occupy their cell.
    fn visible(&self) -> bool {
        true
    }
}

impl Measure for Size {
    fn natural_width(&self) -> i32 {
        self.width
    }

    fn natural_height(&self) -> i32 {
        self.height
    }
}
