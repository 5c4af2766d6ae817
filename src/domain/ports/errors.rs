use thiserror::Error;

/// Errors surfaced by a [`LanguageModel`](super::LanguageModel) adapter
#[derive(Debug, Error)]
pub enum LanguageModelError {
    /// The adapter could not be configured (bad key format, bad base URL)
    #[error("Invalid language model configuration: {0}")]
    InvalidConfiguration(String),

    /// Network failure before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout
    #[error("Timeout waiting for the language model")]
    Timeout,

    /// The API answered with a non-success status
    #[error("Language model API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// The API answered successfully but produced no completion text
    #[error("Empty completion: {0}")]
    EmptyCompletion(String),

    /// Model discovery found nothing that supports text generation
    #[error("No usable model available")]
    NoUsableModel,
}

/// Errors surfaced by a [`QueueStore`](super::QueueStore) adapter
#[derive(Debug, Error)]
pub enum QueueStoreError {
    /// Network failure before a response was received
    #[error("Transport error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout
    #[error("Timeout waiting for the queue store")]
    Timeout,

    /// Credentials were rejected or could not be exchanged for an access token
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The store answered with a non-success status
    #[error("Queue store API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    /// The store acknowledged the write without a usable key
    #[error("Invalid queue store response: {0}")]
    InvalidResponse(String),
}
