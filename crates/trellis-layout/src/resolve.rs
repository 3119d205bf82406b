//! Track size resolution.
//!
//! Resolves the natural (content-driven) size of every track on one axis:
//! fixed tracks keep their declared size, auto tracks take the largest
//! single-span item, and linked tracks are collapsed so every track in a
//! link component shares one size. The link graph may chain and cycle;
//! collapsing walks it iteratively with an explicit path stack so
//! pathological inputs cannot exhaust the call stack.

use log::warn;
use smallvec::SmallVec;
use trellis_core::{Axis, ConfigError};

use crate::item::GridItem;
use crate::track::{Track, TrackSize};

/// Resolution state of one track during link collapsing.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Settled,
}

/// Outgoing link of a track, with self-links collapsed to none.
fn out_link(tracks: &[Track], index: usize) -> Option<usize> {
    match tracks[index].size {
        TrackSize::LinkedTo(target) if target != index => Some(target),
        _ => None,
    }
}

/// Largest per-track contribution among items spanning exactly one track.
///
/// Items spanning several tracks never drive a track's natural size; only
/// single-span items (including fixed-size ones) count.
pub fn content_maxima(axis: Axis, items: &[GridItem], count: usize) -> Vec<i32> {
    let mut maxima = vec![0; count];
    for item in items {
        if item.span(axis) == 1 {
            let index = item.start(axis);
            if index < count {
                maxima[index] = maxima[index].max(item.contribution(axis));
            }
        }
    }
    maxima
}

/// Compute the natural size of every track on one axis.
///
/// `content[i]` is the largest contribution among items occupying exactly
/// track `i` (see [`content_maxima`]); it must have one entry per track.
/// Fails if any link names a track outside the axis.
///
/// Link components resolve to a single shared size:
/// - an acyclic chain takes the maximum value seen along the chain,
///   terminal track included;
/// - a cycle takes the maximum among cycle members only, so a chain feeding
///   into the cycle can never inflate it;
/// - a walk that reaches an already-settled track adopts that track's value.
///
/// A track linking to itself is treated as auto-sized.
pub fn natural_sizes(
    axis: Axis,
    tracks: &[Track],
    content: &[i32],
) -> Result<Vec<i32>, ConfigError> {
    debug_assert_eq!(tracks.len(), content.len());

    // Pre-link seed values. Linked tracks keep their own content maximum as
    // a placeholder until the collapse below settles them.
    let mut sizes: Vec<i32> = tracks
        .iter()
        .zip(content)
        .map(|(track, &max)| match track.size {
            TrackSize::Fixed(px) => px,
            TrackSize::Auto | TrackSize::LinkedTo(_) => max,
        })
        .collect();

    for (index, track) in tracks.iter().enumerate() {
        if let TrackSize::LinkedTo(target) = track.size {
            if target >= tracks.len() {
                return Err(ConfigError::LinkOutOfRange {
                    axis,
                    index,
                    target,
                });
            }
            if target == index {
                warn!("{axis} {index} links to itself; sizing it from content");
            }
        }
    }

    let mut marks = vec![Mark::Unvisited; tracks.len()];
    let mut path: SmallVec<[usize; 8]> = SmallVec::new();

    for start in 0..tracks.len() {
        if marks[start] != Mark::Unvisited || out_link(tracks, start).is_none() {
            continue;
        }

        path.clear();
        let mut current = start;
        let mut path_max = i32::MIN;

        let value = loop {
            path_max = path_max.max(sizes[current]);
            path.push(current);
            marks[current] = Mark::OnPath;

            let Some(next) = out_link(tracks, current) else {
                // Path ends at a fixed or auto track.
                break path_max;
            };
            match marks[next] {
                Mark::Unvisited => current = next,
                Mark::Settled => break sizes[next],
                Mark::OnPath => {
                    // Cycle: the shared size is the maximum among cycle
                    // members only, never the tail leading into it.
                    let mut cycle_max = sizes[next];
                    let mut walk = next;
                    while let Some(step) = out_link(tracks, walk) {
                        if step == next {
                            break;
                        }
                        cycle_max = cycle_max.max(sizes[step]);
                        walk = step;
                    }
                    break cycle_max;
                }
            }
        };

        for &track in &path {
            sizes[track] = value;
            marks[track] = Mark::Settled;
        }
    }

    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use trellis_core::Size;

    fn tracks(sizes: &[TrackSize]) -> Vec<Track> {
        sizes.iter().copied().map(Track::new).collect()
    }

    #[test]
    fn test_fixed_and_auto_tracks() {
        let tracks = tracks(&[TrackSize::Fixed(120), TrackSize::Auto]);
        let resolved = natural_sizes(Axis::Columns, &tracks, &[999, 45]).unwrap();
        assert_eq!(resolved, vec![120, 45]);
    }

    #[test]
    fn test_chain_shares_chain_maximum() {
        // 0 -> 1 -> 2 (auto). The largest value anywhere on the chain wins.
        let tracks = tracks(&[
            TrackSize::LinkedTo(1),
            TrackSize::LinkedTo(2),
            TrackSize::Auto,
        ]);
        let resolved = natural_sizes(Axis::Columns, &tracks, &[5, 50, 10]).unwrap();
        assert_eq!(resolved, vec![50, 50, 50]);
    }

    #[test]
    fn test_chain_can_widen_its_fixed_terminal() {
        let tracks = tracks(&[TrackSize::LinkedTo(1), TrackSize::Fixed(30)]);
        let resolved = natural_sizes(Axis::Columns, &tracks, &[45, 0]).unwrap();
        assert_eq!(resolved, vec![45, 45]);
    }

    #[test]
    fn test_cycle_shares_cycle_maximum() {
        let tracks = tracks(&[TrackSize::LinkedTo(1), TrackSize::LinkedTo(0)]);
        let resolved = natural_sizes(Axis::Rows, &tracks, &[10, 30]).unwrap();
        assert_eq!(resolved, vec![30, 30]);
    }

    #[test]
    fn test_tail_cannot_inflate_cycle() {
        // 0 -> 1 -> 2 -> 1 is a 2-cycle {1, 2} with tail 0. The tail's large
        // content must not leak into the cycle; the tail itself adopts the
        // cycle's shared size.
        let tracks = tracks(&[
            TrackSize::LinkedTo(1),
            TrackSize::LinkedTo(2),
            TrackSize::LinkedTo(1),
        ]);
        let resolved = natural_sizes(Axis::Columns, &tracks, &[99, 10, 20]).unwrap();
        assert_eq!(resolved, vec![20, 20, 20]);
    }

    #[test]
    fn test_settled_component_is_adopted_not_recomputed() {
        // Track 2 reaches track 0 after the 0 -> 1 walk has settled; it must
        // adopt the settled value even though its own content is larger.
        let tracks = tracks(&[
            TrackSize::LinkedTo(1),
            TrackSize::Auto,
            TrackSize::LinkedTo(0),
        ]);
        let resolved = natural_sizes(Axis::Columns, &tracks, &[5, 15, 40]).unwrap();
        assert_eq!(resolved, vec![15, 15, 15]);
    }

    #[test]
    fn test_cycle_including_track_zero() {
        let tracks = tracks(&[TrackSize::LinkedTo(2), TrackSize::Auto, TrackSize::LinkedTo(0)]);
        let resolved = natural_sizes(Axis::Columns, &tracks, &[8, 1, 25]).unwrap();
        assert_eq!(resolved, vec![25, 1, 25]);
    }

    #[test]
    fn test_link_out_of_range() {
        let tracks = tracks(&[TrackSize::LinkedTo(5)]);
        let err = natural_sizes(Axis::Rows, &tracks, &[0]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::LinkOutOfRange {
                axis: Axis::Rows,
                index: 0,
                target: 5
            }
        );
    }

    #[test]
    fn test_content_maxima_counts_single_span_items_only() {
        let items = vec![
            GridItem::cell(0, 0).measured(Size::new(40, 10)),
            GridItem::cell(0, 0).measured(Size::new(70, 10)),
            GridItem::cell(0, 0).spanning(2, 1).measured(Size::new(500, 10)),
            GridItem::cell(1, 0).fixed_width(25).measured(Size::new(90, 10)),
        ];
        assert_eq!(content_maxima(Axis::Columns, &items, 2), vec![70, 0]);
    }

    proptest! {
        #[test]
        fn prop_chain_tracks_all_share_chain_maximum(
            content in proptest::collection::vec(0..500i32, 2..12)
        ) {
            // Track 0 is auto; every later track links to its predecessor.
            let mut chain = vec![Track::new(TrackSize::Auto)];
            for i in 1..content.len() {
                chain.push(Track::new(TrackSize::LinkedTo(i - 1)));
            }
            let resolved = natural_sizes(Axis::Columns, &chain, &content).unwrap();
            let expected = content.iter().copied().max().unwrap();
            prop_assert!(resolved.iter().all(|&s| s == expected));
        }

        #[test]
        fn prop_self_link_behaves_as_auto(content in 0..500i32) {
            let linked = vec![Track::new(TrackSize::LinkedTo(0))];
            let auto = vec![Track::new(TrackSize::Auto)];
            let resolved_linked =
                natural_sizes(Axis::Columns, &linked, &[content]).unwrap();
            let resolved_auto =
                natural_sizes(Axis::Columns, &auto, &[content]).unwrap();
            prop_assert_eq!(resolved_linked, resolved_auto);
        }

        #[test]
        fn prop_full_cycle_shares_global_maximum(
            content in proptest::collection::vec(0..500i32, 2..12)
        ) {
            // Every track links to the next, wrapping around: one big cycle.
            let n = content.len();
            let ring: Vec<Track> = (0..n)
                .map(|i| Track::new(TrackSize::LinkedTo((i + 1) % n)))
                .collect();
            let resolved = natural_sizes(Axis::Rows, &ring, &content).unwrap();
            let expected = content.iter().copied().max().unwrap();
            prop_assert!(resolved.iter().all(|&s| s == expected));
        }
    }
}
