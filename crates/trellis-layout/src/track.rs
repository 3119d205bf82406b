//! Track descriptors.

/// Declared sizing policy for one column or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackSize {
    /// Fixed size in pixels.
    Fixed(i32),
    /// Sized from the items occupying exactly this track.
    #[default]
    Auto,
    /// Same resolved size as another track on the same axis.
    ///
    /// Links may chain and cycle; every track in one link component ends up
    /// with the same resolved size.
    LinkedTo(usize),
}

impl TrackSize {
    /// Map a raw declared value: positive is a fixed pixel size, zero is
    /// auto, and `-k` links to track `k`.
    pub fn from_declared(declared: i32) -> Self {
        if declared > 0 {
            TrackSize::Fixed(declared)
        } else if declared == 0 {
            TrackSize::Auto
        } else {
            TrackSize::LinkedTo(-(declared as i64) as usize)
        }
    }
}

/// One column or row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Track {
    /// Declared sizing policy.
    pub size: TrackSize,
    /// Share of any surplus or deficit during distribution.
    pub weight: i32,
}

impl Track {
    /// Create a track with zero weight.
    pub fn new(size: TrackSize) -> Self {
        Self { size, weight: 0 }
    }

    /// Create a track from a raw declared size value.
    pub fn from_declared(declared: i32) -> Self {
        Self::new(TrackSize::from_declared(declared))
    }

    /// Set the distribution weight.
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }
}
