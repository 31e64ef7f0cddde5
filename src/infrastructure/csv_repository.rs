// CSV repository implementation - reads the common study table
use crate::application::dataset_repository::DatasetRepository;
use crate::domain::dataset::{Channel, TimeSeriesDataset};
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

pub const TIMESTAMP_COLUMN: &str = "timestamp";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Reads a table with a `timestamp` column plus one numeric column per
/// stove or fuel. Converting raw instrument exports into this shape happens
/// upstream.
#[derive(Debug, Clone)]
pub struct CsvDatasetRepository {
    path: PathBuf,
    columns: Option<Vec<String>>,
}

impl CsvDatasetRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            columns: None,
        }
    }

    /// Only load these columns. Other columns may hold anything. A name
    /// listed twice (a channel used as both stove and fuel) is loaded once.
    pub fn with_columns(mut self, columns: Vec<String>) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(columns.len());
        for name in columns {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        self.columns = Some(unique);
        self
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<TimeSeriesDataset> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .context("Failed to read CSV headers")?
            .clone();

        let timestamp_idx = headers
            .iter()
            .position(|h| h == TIMESTAMP_COLUMN)
            .with_context(|| format!("CSV has no '{}' column", TIMESTAMP_COLUMN))?;

        let selected: Vec<(usize, String)> = match &self.columns {
            Some(wanted) => wanted
                .iter()
                .map(|name| {
                    headers
                        .iter()
                        .position(|h| h == name)
                        .map(|idx| (idx, name.clone()))
                        .with_context(|| format!("CSV has no '{}' column", name))
                })
                .collect::<Result<_>>()?,
            None => headers
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != timestamp_idx)
                .map(|(idx, name)| (idx, name.to_string()))
                .collect(),
        };

        let mut timestamps = Vec::new();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); selected.len()];

        for (row, record) in reader.records().enumerate() {
            // Header is line 1
            let line = row + 2;
            let record = record.with_context(|| format!("Failed to read CSV line {}", line))?;

            let raw = record.get(timestamp_idx).unwrap_or_default();
            let timestamp = parse_timestamp(raw)
                .with_context(|| format!("Unparseable timestamp '{}' on line {}", raw, line))?;
            timestamps.push(timestamp);

            for ((idx, name), values) in selected.iter().zip(columns.iter_mut()) {
                let cell = record.get(*idx).unwrap_or_default();
                let value: f64 = cell.parse().with_context(|| {
                    format!("Non-numeric value '{}' in column '{}' on line {}", cell, name, line)
                })?;
                values.push(value);
            }
        }

        tracing::debug!(
            "Read {} samples x {} columns from {}",
            timestamps.len(),
            selected.len(),
            self.path.display()
        );

        let channels = selected
            .into_iter()
            .zip(columns)
            .map(|((_, name), readings)| Channel::new(name, readings))
            .collect();

        Ok(TimeSeriesDataset::new(timestamps, channels)?)
    }
}

impl DatasetRepository for CsvDatasetRepository {
    fn load_dataset(&self) -> Result<TimeSeriesDataset> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open dataset '{}'", self.path.display()))?;
        self.read_from(file)
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Some(time.naive_utc());
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}
