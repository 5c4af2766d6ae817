//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters must implement:
//! - LanguageModel: single-shot text completion
//! - QueueStore: append-only command queue
//!
//! The services depend on these traits only, so tests can substitute fakes
//! for the Gemini and Firebase adapters.

pub mod errors;
pub mod language_model;
pub mod queue_store;

pub use errors::{LanguageModelError, QueueStoreError};
pub use language_model::LanguageModel;
pub use queue_store::QueueStore;
