//! Google Gemini adapter for the [`LanguageModel`](crate::domain::ports::LanguageModel) port

pub mod client;
pub mod types;

pub use client::{GeminiClient, GeminiClientConfig};
pub use types::{select_model, GenerateContentRequest, GenerateContentResponse, ModelInfo};
