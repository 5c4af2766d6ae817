//! Domain errors for the classification and dispatch pipeline.

use thiserror::Error;

use crate::domain::ports::{LanguageModelError, QueueStoreError};

/// Errors raised while turning a user message into an [`Intent`](crate::domain::models::Intent).
#[derive(Debug, Error)]
pub enum ClassificationError {
    /// The model answered, but not with the JSON object we asked for.
    ///
    /// The payload is a diagnostic for operators; it is never shown to users.
    #[error("Malformed model output: {0}")]
    MalformedOutput(String),

    /// No language model is configured, or the completion call failed in transit.
    #[error("Language model unavailable: {0}")]
    ModelUnavailable(String),
}

impl From<LanguageModelError> for ClassificationError {
    fn from(err: LanguageModelError) -> Self {
        match err {
            LanguageModelError::EmptyCompletion(reason) => {
                Self::MalformedOutput(format!("empty completion: {reason}"))
            }
            other => Self::ModelUnavailable(other.to_string()),
        }
    }
}

/// Errors raised while acting on a classified intent.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The queue store rejected or never acknowledged the append.
    #[error("Failed to persist queue entry: {0}")]
    PersistenceFailed(String),
}

impl From<QueueStoreError> for DispatchError {
    fn from(err: QueueStoreError) -> Self {
        Self::PersistenceFailed(err.to_string())
    }
}
