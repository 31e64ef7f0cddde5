// Significant-change filter - thins raw fuel-weight peaks down to real weight changes
/// Keep only candidates whose weight differs from the last kept one by at
/// least `threshold`.
///
/// The first candidate is always kept. When the peak detector found nothing
/// the first sample of the channel stands in as the sole candidate. If the
/// channel ends lower than the last kept weight, the final sample is
/// appended so trailing consumption is not lost.
pub fn find_significant_changes(readings: &[f64], candidates: &[usize], threshold: f64) -> Vec<usize> {
    if readings.is_empty() {
        return Vec::new();
    }

    let (&first, rest) = match candidates.split_first() {
        Some(split) => split,
        None => (&0, &[][..]),
    };

    let mut weight = readings[first];
    let mut kept = vec![first];

    for &i in rest {
        let new_weight = readings[i];
        if (new_weight - weight).abs() >= threshold {
            kept.push(i);
            weight = new_weight;
        }
    }

    let last = readings.len() - 1;
    if readings[last] < weight {
        kept.push(last);
    }

    kept
}
