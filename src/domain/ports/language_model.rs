use async_trait::async_trait;

use super::errors::LanguageModelError;

/// Port trait for a text completion API
///
/// This is a **port** in hexagonal architecture terminology. The intent
/// classifier depends on this trait, not on a concrete HTTP client; the
/// Gemini adapter in the infrastructure layer implements it.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. One instance is built at startup
/// and shared by every concurrently handled message, so `complete` takes
/// `&self` and must not rely on mutable per-call state.
///
/// # Errors
///
/// Adapters distinguish failures the caller treats differently:
/// - transport, timeout and HTTP status failures mean the model is unreachable
/// - [`LanguageModelError::EmptyCompletion`] means the model answered with nothing usable
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send one prompt and return the raw completion text
    ///
    /// The text is returned as produced by the model; callers are expected to
    /// normalize and validate it.
    async fn complete(&self, prompt: &str) -> Result<String, LanguageModelError>;

    /// Identifier of the model behind this client, for logging
    fn model_name(&self) -> &str;
}
