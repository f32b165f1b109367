//! Error types for the agency domain

use thiserror::Error;

/// Errors that can occur during domain operations
///
/// Lookups that find nothing are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// `complete_objective` was called with an index past the active list
    #[error("Objective index {index} out of range (agent has {len} active objectives)")]
    ObjectiveOutOfRange { index: usize, len: usize },

    /// Text could not be parsed into one of the closed enumerations
    #[error("Unknown {kind} '{value}'")]
    UnknownValue { kind: &'static str, value: String },
}

impl DomainError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        DomainError::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
