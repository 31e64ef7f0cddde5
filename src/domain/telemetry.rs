// Chart-ready telemetry models handed to a presentation collaborator
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    pub time_ms: i64,
    pub value: f64,
}

impl TimeSeriesPoint {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesMode {
    Lines,
    Markers,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub name: String,
    pub mode: SeriesMode,
    pub points: Vec<TimeSeriesPoint>,
}

impl SeriesData {
    pub fn new(name: String, mode: SeriesMode, points: Vec<TimeSeriesPoint>) -> Self {
        Self { name, mode, points }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<SeriesData>,
}

impl ChartData {
    pub fn new(title: String, y_title: String, series: Vec<SeriesData>) -> Self {
        Self {
            title,
            x_title: "Time".to_string(),
            y_title,
            series,
        }
    }

    pub fn series_named(&self, name: &str) -> Option<&SeriesData> {
        self.series.iter().find(|s| s.name == name)
    }
}
