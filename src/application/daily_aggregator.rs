// Daily aggregator - buckets detected events into 1-based study days
//
// The two aggregations number days differently. Fuel usage starts its
// counter at day 1 and records into it straight away; cooking time starts
// at day 0 and only writes a day when it closes one. Both advance by a
// single day per change no matter how many calendar days were skipped.
// Existing reports depend on this numbering, so it is kept as is.
use crate::domain::daily::DailySeries;
use crate::domain::dataset::TimeSeriesDataset;
use crate::domain::events::CookingEvent;
use std::collections::BTreeMap;

/// Mass of fuel consumed per study day.
///
/// `changes` are the significant weight-change indices of one fuel channel.
/// Within the current day each change records the drop from the first
/// retained weight; a change on a later day advances the counter and
/// records the drop from the last in-day weight. Increases in weight
/// (refuelling) count as zero consumption.
pub fn daily_fuel_usage(
    dataset: &TimeSeriesDataset,
    readings: &[f64],
    changes: &[usize],
    days: u32,
) -> DailySeries {
    let mut usage = BTreeMap::new();
    let Some(&first) = changes.first() else {
        return DailySeries::covering(usage, days);
    };

    let initial_weight = readings[first];
    let mut day: u32 = 1;
    let mut new_weight = 0.0;

    for &i in changes {
        if dataset.elapsed_days(i) == i64::from(day - 1) {
            new_weight = readings[i];
            usage.insert(day, consumed(initial_weight - new_weight));
        } else {
            day += 1;
            usage.insert(day, consumed(new_weight - readings[i]));
        }
    }

    DailySeries::covering(usage, days)
}

/// Minutes of cooking per study day.
///
/// Events are attributed by the day their end sample falls on, in the
/// order they occurred.
pub fn daily_cooking_minutes(
    dataset: &TimeSeriesDataset,
    events: &[CookingEvent],
    days: u32,
) -> DailySeries {
    let mut cooking = BTreeMap::new();
    let mut day: u32 = 0;
    let mut mins = 0.0;

    for (n, event) in events.iter().enumerate() {
        if dataset.elapsed_days(event.end) != i64::from(day) {
            day += 1;
            cooking.insert(day, mins);
            tracing::debug!("{}: closed day {} with {:.1} min", event.subject, day, mins);
            mins = 0.0;
        }

        mins += dataset.minutes_between(event.start, event.end);

        if n == events.len() - 1 {
            day += 1;
            cooking.insert(day, mins);
        }
    }

    DailySeries::covering(cooking, days)
}

fn consumed(delta: f64) -> f64 {
    if delta < 0.0 {
        tracing::debug!("Weight rose by {:.3}, treating as refuel", -delta);
        0.0
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::Channel;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 8, 26)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Hourly samples for `hours + 1` timestamps.
    fn hourly(hours: i64, readings: Vec<f64>) -> TimeSeriesDataset {
        let timestamps = (0..=hours).map(|h| start() + Duration::hours(h)).collect();
        TimeSeriesDataset::new(timestamps, vec![Channel::new("x", readings)]).unwrap()
    }

    fn event(start: usize, end: usize) -> CookingEvent {
        CookingEvent::new("Wood".to_string(), (start + end) / 2, start, end)
    }

    #[test]
    fn test_fuel_usage_same_day_is_cumulative_from_first_weight() {
        let mut weights = vec![10.0; 73];
        weights[5] = 9.0;
        weights[10] = 8.0;
        let dataset = hourly(72, weights.clone());

        let series = daily_fuel_usage(&dataset, &weights, &[1, 5, 10], 3);
        assert_eq!(series.values(), vec![2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_fuel_usage_next_day_uses_last_in_day_weight() {
        let mut weights = vec![10.0; 73];
        weights[1] = 10.0;
        weights[5] = 9.5;
        weights[30] = 8.0;
        let dataset = hourly(72, weights.clone());

        let series = daily_fuel_usage(&dataset, &weights, &[1, 5, 30], 3);
        assert_eq!(series.get(1), Some(0.5));
        assert_eq!(series.get(2), Some(1.5));
        assert_eq!(series.get(3), Some(0.0));
    }

    #[test]
    fn test_fuel_usage_refuel_counts_as_zero() {
        let weights = vec![4.0, 4.0, 6.0, 6.0, 6.0];
        let dataset = hourly(4, weights.clone());
        let series = daily_fuel_usage(&dataset, &weights, &[1, 2], 1);
        assert_eq!(series.values(), vec![0.0]);
    }

    #[test]
    fn test_fuel_usage_without_changes_is_all_zero() {
        let dataset = hourly(48, vec![1.0; 49]);
        let series = daily_fuel_usage(&dataset, &[1.0; 49], &[], 2);
        assert_eq!(series.values(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_cooking_minutes_single_day() {
        let dataset = hourly(72, vec![0.0; 73]);
        let series = daily_cooking_minutes(&dataset, &[event(2, 4), event(10, 11)], 3);
        assert_eq!(series.values(), vec![180.0, 0.0, 0.0]);
    }

    #[test]
    fn test_cooking_minutes_close_out_on_day_change() {
        let dataset = hourly(72, vec![0.0; 73]);
        let events = [event(2, 3), event(26, 28), event(30, 31)];
        let series = daily_cooking_minutes(&dataset, &events, 3);
        assert_eq!(series.values(), vec![60.0, 180.0, 0.0]);
    }

    #[test]
    fn test_cooking_minutes_first_event_on_later_day_leaves_day_one_empty() {
        let dataset = hourly(72, vec![0.0; 73]);
        let series = daily_cooking_minutes(&dataset, &[event(26, 27)], 3);
        assert_eq!(series.values(), vec![0.0, 60.0, 0.0]);
    }

    #[test]
    fn test_cooking_minutes_skipped_day_advances_by_one() {
        let dataset = hourly(72, vec![0.0; 73]);
        let series = daily_cooking_minutes(&dataset, &[event(2, 3), event(50, 52)], 3);
        assert_eq!(series.values(), vec![60.0, 120.0, 0.0]);
    }

    #[test]
    fn test_cooking_minutes_no_events() {
        let dataset = hourly(48, vec![0.0; 49]);
        let series = daily_cooking_minutes(&dataset, &[], 2);
        assert_eq!(series.values(), vec![0.0, 0.0]);
    }
}
