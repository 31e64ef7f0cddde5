// Time series dataset domain model
use super::error::{AnalysisError, Result};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// One named column of readings (a stove temperature or a fuel weight).
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub name: String,
    pub readings: Vec<f64>,
}

impl Channel {
    pub fn new(name: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            readings,
        }
    }
}

/// Span between the first and last timestamp of a study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StudyDuration {
    pub whole_days: i64,
    #[serde(skip)]
    pub remainder: Duration,
}

impl StudyDuration {
    pub fn between(first: NaiveDateTime, last: NaiveDateTime) -> Self {
        let span = last - first;
        let whole_days = span.num_days();
        Self {
            whole_days,
            remainder: span - Duration::days(whole_days),
        }
    }

    /// Number of 1-based day columns in every daily table. A trailing
    /// partial day does not get a column of its own.
    pub fn days(&self) -> u32 {
        self.whole_days.max(0) as u32
    }
}

/// Immutable, validated sensor table: one timestamp column plus one
/// numeric column per stove or fuel.
#[derive(Debug, Clone)]
pub struct TimeSeriesDataset {
    timestamps: Vec<NaiveDateTime>,
    channels: Vec<Channel>,
}

impl TimeSeriesDataset {
    pub fn new(timestamps: Vec<NaiveDateTime>, channels: Vec<Channel>) -> Result<Self> {
        if timestamps.is_empty() {
            return Err(AnalysisError::InvalidDataset(
                "dataset has no samples".to_string(),
            ));
        }

        if let Some(pos) = timestamps.windows(2).position(|w| w[1] < w[0]) {
            return Err(AnalysisError::InvalidDataset(format!(
                "timestamps must be non-decreasing (sample {} precedes sample {})",
                pos + 1,
                pos
            )));
        }

        for (i, channel) in channels.iter().enumerate() {
            if channel.readings.len() != timestamps.len() {
                return Err(AnalysisError::InvalidDataset(format!(
                    "column '{}' has {} readings but there are {} timestamps",
                    channel.name,
                    channel.readings.len(),
                    timestamps.len()
                )));
            }
            if channels[..i].iter().any(|c| c.name == channel.name) {
                return Err(AnalysisError::InvalidDataset(format!(
                    "column '{}' appears more than once",
                    channel.name
                )));
            }
        }

        Ok(Self {
            timestamps,
            channels,
        })
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn timestamp(&self, index: usize) -> NaiveDateTime {
        self.timestamps[index]
    }

    pub fn study_duration(&self) -> StudyDuration {
        StudyDuration::between(self.timestamps[0], self.timestamps[self.timestamps.len() - 1])
    }

    pub fn readings(&self, name: &str) -> Option<&[f64]> {
        self.channels
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.readings.as_slice())
    }

    /// Whole days elapsed between the first sample and `index`.
    pub fn elapsed_days(&self, index: usize) -> i64 {
        (self.timestamps[index] - self.timestamps[0]).num_days()
    }

    pub fn minutes_between(&self, start: usize, end: usize) -> f64 {
        (self.timestamps[end] - self.timestamps[start]).num_seconds() as f64 / 60.0
    }
}
