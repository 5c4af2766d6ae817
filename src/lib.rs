//! Courier - Telegram to task-queue relay
//!
//! Courier reads free-form Telegram messages, asks a language model whether
//! each one is small talk or a laptop command, and either answers directly or
//! appends the command to a Firebase Realtime Database queue that a separate
//! agent drains.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Intent model, queue records, port traits
//! - **Service Layer** (`services`): Classifier, dispatcher, message handler
//! - **Application Layer** (`application`): Startup wiring
//! - **Infrastructure Layer** (`infrastructure`): Gemini, Firebase, Telegram,
//!   liveness, configuration and logging adapters
//!
//! # Example
//!
//! ```ignore
//! use courier::application::Relay;
//! use courier::infrastructure::config::ConfigLoader;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigLoader::load(None)?;
//!     Relay::build(config).await?.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::Relay;
pub use domain::errors::{ClassificationError, DispatchError};
pub use domain::models::{
    Ack, Config, InboundMessage, Intent, QueueEntry, QueueStatus, UserIdentity,
};
pub use domain::ports::{LanguageModel, LanguageModelError, QueueStore, QueueStoreError};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CommandDispatcher, IntentClassifier, MessageHandler};
