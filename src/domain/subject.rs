// Subject domain model - stoves and fuels that are measured in a study
use super::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectKind {
    Stove,
    Fuel,
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectKind::Stove => write!(f, "Stove"),
            SubjectKind::Fuel => write!(f, "Fuel"),
        }
    }
}

/// Which configured subjects an analysis should run over.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubjectSelection {
    #[default]
    All,
    Named(Vec<String>),
}

impl SubjectSelection {
    pub fn one(name: impl Into<String>) -> Self {
        SubjectSelection::Named(vec![name.into()])
    }

    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SubjectSelection::Named(names.into_iter().map(Into::into).collect())
    }

    /// Resolve against the configured subject list, keeping the caller's
    /// order and dropping repeated names.
    pub fn resolve(&self, kind: SubjectKind, configured: &[String]) -> Result<Vec<String>> {
        match self {
            SubjectSelection::All => Ok(configured.to_vec()),
            SubjectSelection::Named(names) => {
                if names.is_empty() {
                    return Err(AnalysisError::EmptySubjects(kind));
                }

                let mut resolved: Vec<String> = Vec::with_capacity(names.len());
                for name in names {
                    if !configured.contains(name) {
                        return Err(AnalysisError::UnknownSubject {
                            kind,
                            name: name.clone(),
                        });
                    }
                    if !resolved.contains(name) {
                        resolved.push(name.clone());
                    }
                }
                Ok(resolved)
            }
        }
    }
}

impl From<&str> for SubjectSelection {
    fn from(name: &str) -> Self {
        SubjectSelection::one(name)
    }
}

impl From<Vec<String>> for SubjectSelection {
    fn from(names: Vec<String>) -> Self {
        SubjectSelection::Named(names)
    }
}
