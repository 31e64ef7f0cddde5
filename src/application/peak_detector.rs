// Peak detector - local maxima filtered by height and spacing
use std::cmp::Ordering;

/// Height and spacing constraints applied to local maxima.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeakPolicy {
    /// Minimum reading a peak must reach.
    pub min_height: f64,
    /// Minimum number of samples between two accepted peaks.
    pub min_distance: usize,
}

impl PeakPolicy {
    /// Permissive policy that reports nearly every rise and fall of a fuel
    /// weight trace.
    pub const WEIGHT: PeakPolicy = PeakPolicy {
        min_height: 1.0,
        min_distance: 1,
    };

    pub fn new(min_height: f64, min_distance: usize) -> Self {
        Self {
            min_height,
            min_distance,
        }
    }
}

/// Find peaks in a channel.
///
/// A peak is a sample (or the midpoint of a flat run of samples) whose
/// neighbours on both sides are strictly lower. The first and last samples
/// are never peaks. Peaks below `min_height` are dropped, then peaks closer
/// than `min_distance` samples to a higher one are dropped. Among equal
/// heights the earlier peak wins.
///
/// Returns strictly increasing sample indices.
pub fn find_peaks(readings: &[f64], policy: PeakPolicy) -> Vec<usize> {
    let peaks: Vec<usize> = local_maxima(readings)
        .into_iter()
        .filter(|&i| readings[i] >= policy.min_height)
        .collect();

    if policy.min_distance > 1 && peaks.len() > 1 {
        select_by_distance(readings, peaks, policy.min_distance)
    } else {
        peaks
    }
}

fn local_maxima(readings: &[f64]) -> Vec<usize> {
    let mut maxima = Vec::new();
    if readings.len() < 3 {
        return maxima;
    }

    let last = readings.len() - 1;
    let mut i = 1;
    while i < last {
        if readings[i - 1] < readings[i] {
            // Walk across a plateau of equal readings
            let mut ahead = i + 1;
            while ahead < last && readings[ahead] == readings[i] {
                ahead += 1;
            }

            if readings[ahead] < readings[i] {
                maxima.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }

    maxima
}

fn select_by_distance(readings: &[f64], peaks: Vec<usize>, min_distance: usize) -> Vec<usize> {
    let mut by_priority: Vec<usize> = (0..peaks.len()).collect();
    by_priority.sort_by(|&a, &b| {
        readings[peaks[b]]
            .partial_cmp(&readings[peaks[a]])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut keep = vec![true; peaks.len()];
    for j in by_priority {
        if !keep[j] {
            continue;
        }

        let mut k = j;
        while k > 0 && peaks[j] - peaks[k - 1] < min_distance {
            keep[k - 1] = false;
            k -= 1;
        }

        let mut k = j + 1;
        while k < peaks.len() && peaks[k] - peaks[j] < min_distance {
            keep[k] = false;
            k += 1;
        }
    }

    peaks
        .into_iter()
        .zip(keep)
        .filter_map(|(peak, kept)| kept.then_some(peak))
        .collect()
}
