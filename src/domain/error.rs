// Analysis error taxonomy
use super::events::BoundarySide;
use super::subject::SubjectKind;
use thiserror::Error;

/// Errors raised by dataset construction and household analysis.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("{kind} '{name}' has no matching column in the dataset")]
    MissingChannel { kind: SubjectKind, name: String },

    #[error("At least one {0} must be configured")]
    EmptySubjects(SubjectKind),

    #[error("{kind} '{name}' not found in data set")]
    UnknownSubject { kind: SubjectKind, name: String },

    #[error("No zero-temperature sample {side} peak {peak} on stove '{subject}'")]
    BoundaryNotFound {
        subject: String,
        peak: usize,
        side: BoundarySide,
    },
}

pub type Result<T, E = AnalysisError> = std::result::Result<T, E>;
