//! Weighted distribution of surplus or deficit.

/// Stretch or shrink natural sizes to fit `desired_total`.
///
/// The surplus (or deficit) relative to the summed natural sizes is split
/// proportionally to `weights`. A zero `weight_sum` leaves every track at
/// its natural size. Per-track adjustments truncate toward zero, so up to
/// a weight-sum's worth of pixels can stay unassigned rather than being
/// rounded onto some track.
///
/// Sizes are not clamped: a deficit larger than a heavily weighted track
/// can drive it negative. Callers that need a non-negative invariant should
/// use [`distribute_clamped`].
pub fn distribute(
    natural: &[i32],
    weights: &[i32],
    weight_sum: i32,
    desired_total: i32,
) -> Vec<i32> {
    debug_assert_eq!(natural.len(), weights.len());

    if weight_sum == 0 {
        return natural.to_vec();
    }

    let preferred: i32 = natural.iter().sum();
    let unit = f64::from(desired_total - preferred) / f64::from(weight_sum);

    natural
        .iter()
        .zip(weights)
        .map(|(&size, &weight)| size + (unit * f64::from(weight)) as i32)
        .collect()
}

/// Like [`distribute`], but floors every final size at zero.
pub fn distribute_clamped(
    natural: &[i32],
    weights: &[i32],
    weight_sum: i32,
    desired_total: i32,
) -> Vec<i32> {
    distribute(natural, weights, weight_sum, desired_total)
        .into_iter()
        .map(|size| size.max(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_surplus_split() {
        assert_eq!(distribute(&[10, 20], &[1, 1], 2, 40), vec![15, 25]);
    }

    #[test]
    fn test_weighted_split_truncates_toward_zero() {
        // Surplus 10 over weight sum 3: unit = 3.333...
        assert_eq!(distribute(&[0, 0, 0], &[1, 1, 1], 3, 10), vec![3, 3, 3]);
    }

    #[test]
    fn test_zero_weight_sum_is_a_no_op() {
        assert_eq!(distribute(&[10, 20], &[0, 0], 0, 500), vec![10, 20]);
    }

    #[test]
    fn test_deficit_shrinks_and_may_go_negative() {
        // Deficit of 40 lands entirely on the second track.
        assert_eq!(distribute(&[10, 20], &[0, 1], 1, -10), vec![10, -20]);
        assert_eq!(distribute_clamped(&[10, 20], &[0, 1], 1, -10), vec![10, 0]);
    }

    #[test]
    fn test_unweighted_tracks_keep_natural_size() {
        assert_eq!(distribute(&[10, 20, 30], &[0, 2, 0], 2, 80), vec![10, 40, 30]);
    }

    proptest! {
        #[test]
        fn prop_zero_weight_sum_is_identity(
            natural in proptest::collection::vec(0..1000i32, 1..16),
            total in -5000..5000i32,
        ) {
            let weights = vec![0; natural.len()];
            prop_assert_eq!(distribute(&natural, &weights, 0, total), natural);
        }

        #[test]
        fn prop_clamped_never_negative(
            natural in proptest::collection::vec(0..1000i32, 1..16),
            total in -5000..5000i32,
        ) {
            let weights = vec![1; natural.len()];
            let sum = natural.len() as i32;
            let sizes = distribute_clamped(&natural, &weights, sum, total);
            prop_assert!(sizes.iter().all(|&s| s >= 0));
        }
    }
}
