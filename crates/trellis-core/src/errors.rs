//! Error types for the Trellis engine.

use crate::types::Axis;
use thiserror::Error;

/// Configuration errors.
///
/// Every variant is fatal to the configuration and surfaces before a layout
/// pass produces any output. Arithmetic edge cases (zero weight sum,
/// shrinking a track below zero) are defined degenerate behaviors, not
/// errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{axis} {index} links to non-existent {axis} {target}")]
    LinkOutOfRange {
        axis: Axis,
        index: usize,
        target: usize,
    },

    #[error("{axis} weight list must match number of {axis}s: expected {expected}, found {found}")]
    WeightCountMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },

    #[error("Unrecognized character {found:?} in anchor specification")]
    UnknownAnchor { found: char },

    #[error("Missing attribute: {attribute}")]
    MissingAttribute { attribute: String },

    #[error("Illegal value {token:?} in {attribute} attribute")]
    InvalidTrackList { attribute: String, token: String },

    #[error("{axis} index {index} out of range for {count} {axis}s")]
    TrackIndexOutOfRange {
        axis: Axis,
        index: usize,
        count: usize,
    },

    #[error("Item spans {axis}s [{start}, {end}) but the grid has {count} {axis}s")]
    CellOutOfRange {
        axis: Axis,
        start: usize,
        end: usize,
        count: usize,
    },
}
