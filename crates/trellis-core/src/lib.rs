//! Core types and errors for the Trellis grid layout engine.
//!
//! This crate provides the foundational types used by `trellis-layout`:
//! - Integer pixel geometry (`Axis`, `Size`, `Rect`)
//! - Ordered anchor specifications for cell edges
//! - The `Measure` capability for host-supplied item sizes
//! - Error types
//! - Markup track-list parsing

pub mod anchor;
pub mod attr;
pub mod errors;
pub mod measure;
pub mod types;

pub use anchor::*;
pub use errors::*;
pub use measure::*;
pub use types::*;
