//! Integer pixel geometry shared across the engine.

use std::fmt;

/// Selects the column or row direction of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// The horizontal axis: tracks are columns.
    Columns,
    /// The vertical axis: tracks are rows.
    Rows,
}

impl Axis {
    /// Singular track name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Axis::Columns => "column",
            Axis::Rows => "row",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A size in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Create a size.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// The extent along one axis.
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Columns => self.width,
            Axis::Rows => self.height,
        }
    }
}

/// An axis-aligned rectangle in absolute pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle with position and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Get the size of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 100, 50);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 70);
        assert_eq!(rect.size(), Size::new(100, 50));
    }

    #[test]
    fn test_size_along_axis() {
        let size = Size::new(30, 40);
        assert_eq!(size.along(Axis::Columns), 30);
        assert_eq!(size.along(Axis::Rows), 40);
    }

    #[test]
    fn test_axis_names() {
        assert_eq!(Axis::Columns.name(), "column");
        assert_eq!(Axis::Rows.to_string(), "row");
    }
}
