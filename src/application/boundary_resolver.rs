// Event boundary resolver - zero-baseline search around a cooking peak
use crate::domain::events::{BoundaryResolution, BoundarySide};

/// Walk outward from `peak` to the nearest zero reading on each side.
///
/// Both scans include the peak sample itself. When the channel never
/// returns to zero on one side the result is `Unbounded` for that side
/// (the earlier side is reported first).
pub fn resolve_boundaries(readings: &[f64], peak: usize) -> BoundaryResolution {
    if peak >= readings.len() {
        return BoundaryResolution::Unbounded {
            side: BoundarySide::After,
        };
    }

    let Some(start) = (0..=peak).rev().find(|&i| readings[i] == 0.0) else {
        return BoundaryResolution::Unbounded {
            side: BoundarySide::Before,
        };
    };

    let Some(end) = (peak..readings.len()).find(|&i| readings[i] == 0.0) else {
        return BoundaryResolution::Unbounded {
            side: BoundarySide::After,
        };
    };

    BoundaryResolution::Found { start, end }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_finds_flanking_zeros() {
        let temps = vec![0.0, 0.0, 5.0, 18.0, 25.0, 12.0, 0.0, 0.0];
        assert_eq!(
            resolve_boundaries(&temps, 4),
            BoundaryResolution::Found { start: 1, end: 6 }
        );
    }

    #[test]
    fn test_nearest_zero_wins_over_earlier_ones() {
        let temps = vec![0.0, 30.0, 0.0, 20.0, 40.0, 0.0, 20.0, 0.0];
        assert_eq!(
            resolve_boundaries(&temps, 4),
            BoundaryResolution::Found { start: 2, end: 5 }
        );
    }

    #[test]
    fn test_missing_leading_baseline_is_unbounded() {
        let temps = vec![10.0, 20.0, 30.0, 0.0];
        assert_eq!(
            resolve_boundaries(&temps, 2),
            BoundaryResolution::Unbounded {
                side: BoundarySide::Before
            }
        );
    }

    #[test]
    fn test_missing_trailing_baseline_is_unbounded() {
        let temps = vec![0.0, 20.0, 30.0, 25.0];
        assert_eq!(
            resolve_boundaries(&temps, 2),
            BoundaryResolution::Unbounded {
                side: BoundarySide::After
            }
        );
    }

    #[test]
    fn test_peak_past_end_is_unbounded() {
        assert!(matches!(
            resolve_boundaries(&[0.0, 1.0], 5),
            BoundaryResolution::Unbounded { .. }
        ));
    }

    proptest! {
        #[test]
        fn prop_found_boundaries_contain_peak_and_sit_on_zero(
            readings in prop::collection::vec(prop_oneof![Just(0.0f64), 1.0f64..60.0], 1..200),
            seed in any::<prop::sample::Index>(),
        ) {
            let peak = seed.index(readings.len());
            if let BoundaryResolution::Found { start, end } = resolve_boundaries(&readings, peak) {
                prop_assert!(start <= peak && peak <= end);
                prop_assert_eq!(readings[start], 0.0);
                prop_assert_eq!(readings[end], 0.0);
                prop_assert!(readings[start + 1..peak.max(start + 1)].iter().all(|&r| r != 0.0));
            }
        }
    }
}
