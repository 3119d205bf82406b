//! Grid configuration.

use trellis_core::{Axis, ConfigError};

use crate::track::{Track, TrackSize};

/// The layout's configuration: ordered column and row tracks.
///
/// A `Grid` holds declared sizes and weights only. Resolved and final sizes
/// are produced fresh by each pipeline pass, and weight sums are recomputed
/// on demand, so no mutation can leave stale derived state behind.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    columns: Vec<Track>,
    rows: Vec<Track>,
}

impl Grid {
    /// Create a grid from raw declared sizes, all weights zero.
    pub fn new(column_sizes: &[i32], row_sizes: &[i32]) -> Result<Self, ConfigError> {
        Self::configure(column_sizes, row_sizes, None, None)
    }

    /// Create a grid from declared sizes and optional weight lists.
    ///
    /// Weight list lengths must match the track counts; link targets must
    /// name existing tracks.
    pub fn configure(
        column_sizes: &[i32],
        row_sizes: &[i32],
        column_weights: Option<&[i32]>,
        row_weights: Option<&[i32]>,
    ) -> Result<Self, ConfigError> {
        let mut grid = Self {
            columns: column_sizes.iter().map(|&v| Track::from_declared(v)).collect(),
            rows: row_sizes.iter().map(|&v| Track::from_declared(v)).collect(),
        };
        if let Some(weights) = column_weights {
            grid.apply_weights(Axis::Columns, weights)?;
        }
        if let Some(weights) = row_weights {
            grid.apply_weights(Axis::Rows, weights)?;
        }
        grid.validate_links(Axis::Columns)?;
        grid.validate_links(Axis::Rows)?;
        Ok(grid)
    }

    /// Create a grid from already-built track descriptors.
    pub fn from_tracks(columns: Vec<Track>, rows: Vec<Track>) -> Result<Self, ConfigError> {
        let grid = Self { columns, rows };
        grid.validate_links(Axis::Columns)?;
        grid.validate_links(Axis::Rows)?;
        Ok(grid)
    }

    fn apply_weights(&mut self, axis: Axis, weights: &[i32]) -> Result<(), ConfigError> {
        let tracks = self.tracks_mut(axis);
        if weights.len() != tracks.len() {
            return Err(ConfigError::WeightCountMismatch {
                axis,
                expected: tracks.len(),
                found: weights.len(),
            });
        }
        for (track, &weight) in tracks.iter_mut().zip(weights) {
            track.weight = weight;
        }
        Ok(())
    }

    fn validate_links(&self, axis: Axis) -> Result<(), ConfigError> {
        let tracks = self.tracks(axis);
        for (index, track) in tracks.iter().enumerate() {
            if let TrackSize::LinkedTo(target) = track.size {
                if target >= tracks.len() {
                    return Err(ConfigError::LinkOutOfRange {
                        axis,
                        index,
                        target,
                    });
                }
            }
        }
        Ok(())
    }

    /// The tracks along one axis.
    pub fn tracks(&self, axis: Axis) -> &[Track] {
        match axis {
            Axis::Columns => &self.columns,
            Axis::Rows => &self.rows,
        }
    }

    fn tracks_mut(&mut self, axis: Axis) -> &mut Vec<Track> {
        match axis {
            Axis::Columns => &mut self.columns,
            Axis::Rows => &mut self.rows,
        }
    }

    /// Number of tracks along one axis.
    pub fn track_count(&self, axis: Axis) -> usize {
        self.tracks(axis).len()
    }

    /// Per-track weights along one axis.
    pub fn weights(&self, axis: Axis) -> Vec<i32> {
        self.tracks(axis).iter().map(|t| t.weight).collect()
    }

    /// Sum of weights along one axis, recomputed on demand.
    pub fn weight_sum(&self, axis: Axis) -> i32 {
        self.tracks(axis).iter().map(|t| t.weight).sum()
    }

    /// Set a track's declared size.
    pub fn set_track_size(
        &mut self,
        axis: Axis,
        index: usize,
        declared: i32,
    ) -> Result<(), ConfigError> {
        let count = self.track_count(axis);
        if index >= count {
            return Err(ConfigError::TrackIndexOutOfRange { axis, index, count });
        }
        let size = TrackSize::from_declared(declared);
        if let TrackSize::LinkedTo(target) = size {
            if target >= count {
                return Err(ConfigError::LinkOutOfRange {
                    axis,
                    index,
                    target,
                });
            }
        }
        self.tracks_mut(axis)[index].size = size;
        Ok(())
    }

    /// Set a track's distribution weight.
    pub fn set_track_weight(
        &mut self,
        axis: Axis,
        index: usize,
        weight: i32,
    ) -> Result<(), ConfigError> {
        let count = self.track_count(axis);
        if index >= count {
            return Err(ConfigError::TrackIndexOutOfRange { axis, index, count });
        }
        self.tracks_mut(axis)[index].weight = weight;
        Ok(())
    }

    /// Grow or shrink the number of tracks along one axis.
    ///
    /// New tracks are auto-sized with zero weight. Shrinking fails if a
    /// surviving track would link past the new count.
    pub fn resize(&mut self, axis: Axis, count: usize) -> Result<(), ConfigError> {
        let tracks = self.tracks(axis);
        if count < tracks.len() {
            for (index, track) in tracks.iter().take(count).enumerate() {
                if let TrackSize::LinkedTo(target) = track.size {
                    if target >= count {
                        return Err(ConfigError::LinkOutOfRange {
                            axis,
                            index,
                            target,
                        });
                    }
                }
            }
        }
        self.tracks_mut(axis).resize(count, Track::default());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_with_weights() {
        let grid = Grid::configure(&[100, 0], &[20], Some(&[1, 3]), None).unwrap();
        assert_eq!(grid.weights(Axis::Columns), vec![1, 3]);
        assert_eq!(grid.weight_sum(Axis::Columns), 4);
        assert_eq!(grid.weight_sum(Axis::Rows), 0);
    }

    #[test]
    fn test_weight_count_mismatch() {
        let err = Grid::configure(&[100, 0], &[20], Some(&[1]), None).unwrap_err();
        assert_eq!(
            err,
            ConfigError::WeightCountMismatch {
                axis: Axis::Columns,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_link_out_of_range_rejected_at_construction() {
        let err = Grid::new(&[0, -5], &[20]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LinkOutOfRange {
                axis: Axis::Columns,
                index: 1,
                target: 5
            }
        );
    }

    #[test]
    fn test_mutators_validate_indices() {
        let mut grid = Grid::new(&[0, 0], &[0]).unwrap();
        assert!(grid.set_track_size(Axis::Columns, 1, 40).is_ok());
        assert_eq!(grid.tracks(Axis::Columns)[1].size, TrackSize::Fixed(40));

        let err = grid.set_track_weight(Axis::Rows, 3, 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TrackIndexOutOfRange {
                axis: Axis::Rows,
                index: 3,
                count: 1
            }
        );
    }

    #[test]
    fn test_set_track_size_rejects_dangling_link() {
        let mut grid = Grid::new(&[0, 0], &[0]).unwrap();
        let err = grid.set_track_size(Axis::Columns, 0, -7).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LinkOutOfRange {
                axis: Axis::Columns,
                index: 0,
                target: 7
            }
        );
    }

    #[test]
    fn test_resize_grows_with_auto_tracks() {
        let mut grid = Grid::new(&[100], &[20]).unwrap();
        grid.resize(Axis::Columns, 3).unwrap();
        assert_eq!(grid.track_count(Axis::Columns), 3);
        assert_eq!(grid.tracks(Axis::Columns)[2].size, TrackSize::Auto);
    }

    #[test]
    fn test_resize_refuses_to_orphan_links() {
        let mut grid = Grid::new(&[0, 0, -1], &[20]).unwrap();
        // Dropping track 2 is fine; dropping track 1 would orphan nothing
        // either since the link lives on track 2.
        grid.resize(Axis::Columns, 2).unwrap();
        assert_eq!(grid.track_count(Axis::Columns), 2);

        let mut grid = Grid::new(&[-2, 0, 0], &[20]).unwrap();
        let err = grid.resize(Axis::Columns, 1).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LinkOutOfRange {
                axis: Axis::Columns,
                index: 0,
                target: 2
            }
        );
    }
}
