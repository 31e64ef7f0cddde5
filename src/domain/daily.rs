// Day-bucketed series and subject x day tables
use serde::Serialize;
use std::collections::BTreeMap;

/// Scalar per 1-based study day. Always holds exactly one entry for every
/// day in `1..=days`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySeries {
    days: BTreeMap<u32, f64>,
}

impl DailySeries {
    /// Fill every day in `1..=days` that `raw` lacks with zero. Buckets past
    /// the end of the study are discarded.
    pub fn covering(mut raw: BTreeMap<u32, f64>, days: u32) -> Self {
        let overflow = raw.split_off(&(days + 1));
        if !overflow.is_empty() {
            tracing::warn!(
                "Discarding {} day bucket(s) beyond the {}-day study: {:?}",
                overflow.len(),
                days,
                overflow.keys().collect::<Vec<_>>()
            );
        }
        raw.remove(&0);

        for day in 1..=days {
            raw.entry(day).or_insert(0.0);
        }

        Self { days: raw }
    }

    pub fn get(&self, day: u32) -> Option<f64> {
        self.days.get(&day).copied()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = u32> + '_ {
        self.days.keys().copied()
    }

    pub fn values(&self) -> Vec<f64> {
        self.days.values().copied().collect()
    }

    pub fn total(&self) -> f64 {
        self.days.values().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRow {
    pub subject: String,
    pub values: Vec<f64>,
}

/// Rows are subjects, columns are study days 1..=days.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectDayTable {
    pub days: u32,
    pub rows: Vec<SubjectRow>,
}

impl SubjectDayTable {
    pub fn new(days: u32) -> Self {
        Self {
            days,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, subject: String, series: &DailySeries) {
        self.rows.push(SubjectRow {
            subject,
            values: series.values(),
        });
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.subject.as_str())
    }

    pub fn row(&self, subject: &str) -> Option<&[f64]> {
        self.rows
            .iter()
            .find(|r| r.subject == subject)
            .map(|r| r.values.as_slice())
    }

    /// Value for `subject` on the 1-based `day`.
    pub fn value(&self, subject: &str, day: u32) -> Option<f64> {
        if day == 0 {
            return None;
        }
        self.row(subject)
            .and_then(|values| values.get(day as usize - 1).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covering_backfills_missing_days() {
        let raw = BTreeMap::from([(2, 12.5)]);
        let series = DailySeries::covering(raw, 4);
        assert_eq!(series.days().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(series.values(), vec![0.0, 12.5, 0.0, 0.0]);
    }

    #[test]
    fn test_covering_discards_overflow_days() {
        let raw = BTreeMap::from([(1, 1.0), (3, 2.0)]);
        let series = DailySeries::covering(raw, 2);
        assert_eq!(series.values(), vec![1.0, 0.0]);
        assert_eq!(series.total(), 1.0);
    }

    #[test]
    fn test_table_lookup_by_day() {
        let mut table = SubjectDayTable::new(2);
        table.push(
            "Wood".to_string(),
            &DailySeries::covering(BTreeMap::from([(2, 30.0)]), 2),
        );
        assert_eq!(table.value("Wood", 1), Some(0.0));
        assert_eq!(table.value("Wood", 2), Some(30.0));
        assert_eq!(table.value("Wood", 3), None);
        assert_eq!(table.value("Wood", 0), None);
        assert_eq!(table.subjects().collect::<Vec<_>>(), vec!["Wood"]);
    }
}
