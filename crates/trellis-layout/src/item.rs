//! Item placement records.

use trellis_core::{Anchor, Axis, Measure, Size};

/// One rectangular item's layout facts: cell position, span, anchor, and
/// host-measured natural size.
///
/// Spans are declared as in the markup: a positive span covers that many
/// tracks, a negative span means "fixed pixel size `|span|`", occupying a
/// single cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GridItem {
    /// Starting column index.
    pub column: usize,
    /// Starting row index.
    pub row: usize,
    /// Column span, or `-px` for a fixed width.
    pub span_columns: i32,
    /// Row span, or `-px` for a fixed height.
    pub span_rows: i32,
    /// Which cell edges to snap to or stretch toward.
    pub anchor: Anchor,
    /// Host-measured natural size.
    pub natural: Size,
    /// Whether the item contributes to track sizing.
    pub visible: bool,
}

impl GridItem {
    /// An item occupying the single cell `(column, row)`, anchored to all
    /// four edges.
    pub fn cell(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            span_columns: 1,
            span_rows: 1,
            anchor: Anchor::default(),
            natural: Size::default(),
            visible: true,
        }
    }

    /// Build an item from anything implementing [`Measure`].
    pub fn from_measure(column: usize, row: usize, content: &impl Measure) -> Self {
        let mut item = Self::cell(column, row)
            .measured(Size::new(content.natural_width(), content.natural_height()));
        item.visible = content.visible();
        item
    }

    /// Span this many columns and rows.
    pub fn spanning(mut self, columns: i32, rows: i32) -> Self {
        self.span_columns = columns;
        self.span_rows = rows;
        self
    }

    /// Use a fixed pixel width instead of spanning columns.
    pub fn fixed_width(mut self, px: i32) -> Self {
        self.span_columns = -px;
        self
    }

    /// Use a fixed pixel height instead of spanning rows.
    pub fn fixed_height(mut self, px: i32) -> Self {
        self.span_rows = -px;
        self
    }

    /// Set the anchor specification.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Record the host-measured natural size.
    pub fn measured(mut self, natural: Size) -> Self {
        self.natural = natural;
        self
    }

    /// Mark the item as not contributing to track sizing.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Starting track index along one axis.
    pub fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Columns => self.column,
            Axis::Rows => self.row,
        }
    }

    /// Declared span along one axis (negative means fixed pixels).
    pub fn span(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Columns => self.span_columns,
            Axis::Rows => self.span_rows,
        }
    }

    /// Number of tracks occupied along one axis; a fixed-size item occupies
    /// one.
    pub fn tracks_occupied(&self, axis: Axis) -> usize {
        let span = self.span(axis);
        if span < 0 {
            1
        } else {
            span as usize
        }
    }

    /// This item's contribution to a track's natural size.
    ///
    /// Fixed pixel sizes always contribute; measured sizes contribute only
    /// while visible.
    pub fn contribution(&self, axis: Axis) -> i32 {
        let span = self.span(axis);
        if span < 0 {
            span.saturating_neg()
        } else if self.visible {
            self.natural.along(axis)
        } else {
            0
        }
    }
}
