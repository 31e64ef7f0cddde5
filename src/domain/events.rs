// Detected event domain models
use serde::Serialize;
use std::fmt;

/// One cooking occurrence on a stove, bounded by zero-temperature samples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CookingEvent {
    pub subject: String,
    pub peak: usize,
    pub start: usize,
    pub end: usize,
}

impl CookingEvent {
    pub fn new(subject: String, peak: usize, start: usize, end: usize) -> Self {
        Self {
            subject,
            peak,
            start,
            end,
        }
    }
}

/// A fuel-store weight retained as a significant change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightChangePoint {
    pub subject: String,
    pub index: usize,
    pub value: f64,
}

impl WeightChangePoint {
    pub fn new(subject: String, index: usize, value: f64) -> Self {
        Self {
            subject,
            index,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySide {
    Before,
    After,
}

impl fmt::Display for BoundarySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundarySide::Before => write!(f, "before"),
            BoundarySide::After => write!(f, "after"),
        }
    }
}

/// Outcome of walking outward from a peak to the zero baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryResolution {
    Found { start: usize, end: usize },
    Unbounded { side: BoundarySide },
}
