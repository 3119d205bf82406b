//! Cell-edge anchor specifications.
//!
//! An anchor names which edges of its cell an item snaps to or stretches
//! toward. Naming both edges of an axis makes the item fill that axis;
//! naming neither centers it.

use std::fmt;
use std::str::FromStr;

use smallvec::{smallvec, SmallVec};

use crate::errors::ConfigError;

/// One cell edge an item can anchor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl AnchorEdge {
    fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(AnchorEdge::Left),
            'r' => Some(AnchorEdge::Right),
            't' => Some(AnchorEdge::Top),
            'b' => Some(AnchorEdge::Bottom),
            _ => None,
        }
    }

    /// The character used for this edge in markup anchor strings.
    pub fn as_char(&self) -> char {
        match self {
            AnchorEdge::Left => 'l',
            AnchorEdge::Right => 'r',
            AnchorEdge::Top => 't',
            AnchorEdge::Bottom => 'b',
        }
    }
}

/// An ordered anchor specification.
///
/// Edge order is preserved: placement processes edges from the last one
/// backward, so when both edges of an axis are present the first edge in
/// reading order decides the sizing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    edges: SmallVec<[AnchorEdge; 4]>,
}

impl Anchor {
    /// Parse an anchor string such as `"lrtb"` or `"t"`.
    ///
    /// Any character outside `lrtb` is a configuration error.
    pub fn parse(spec: &str) -> Result<Self, ConfigError> {
        let mut edges = SmallVec::new();
        for c in spec.chars() {
            match AnchorEdge::from_char(c) {
                Some(edge) => edges.push(edge),
                None => return Err(ConfigError::UnknownAnchor { found: c }),
            }
        }
        Ok(Self { edges })
    }

    /// An anchor with no edges; the item centers in its cell.
    pub fn none() -> Self {
        Self {
            edges: SmallVec::new(),
        }
    }

    /// The edges in reading order.
    pub fn edges(&self) -> &[AnchorEdge] {
        &self.edges
    }
}

impl Default for Anchor {
    /// Anchors to all four edges, filling the cell exactly.
    fn default() -> Self {
        Self {
            edges: smallvec![
                AnchorEdge::Left,
                AnchorEdge::Right,
                AnchorEdge::Top,
                AnchorEdge::Bottom,
            ],
        }
    }
}

impl FromStr for Anchor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            write!(f, "{}", edge.as_char())?;
        }
        Ok(())
    }
}
