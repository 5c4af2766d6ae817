//! Service layer: the message pipeline.
//!
//! - [`IntentClassifier`]: raw text to [`Intent`](crate::domain::models::Intent)
//! - [`CommandDispatcher`]: intent to queue write or direct reply
//! - [`MessageHandler`]: both of the above, plus the user-facing error replies

pub mod command_dispatcher;
pub mod intent_classifier;
pub mod message_handler;

pub use command_dispatcher::CommandDispatcher;
pub use intent_classifier::{build_prompt, IntentClassifier};
pub use message_handler::{MessageHandler, MODEL_UNAVAILABLE_REPLY, PROCESSING_ERROR_REPLY};
