//! Intent classifier service.
//!
//! Sends one prompt per user message to the language model and turns its
//! free-text answer into an [`Intent`]. The model is treated as an untrusted
//! generator: everything it returns goes through [`parse_intent`].

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::domain::errors::ClassificationError;
use crate::domain::models::{parse_intent, Intent};
use crate::domain::ports::LanguageModel;

/// Classifies raw user text as an automation command or chat.
#[derive(Clone)]
pub struct IntentClassifier {
    model: Option<Arc<dyn LanguageModel>>,
}

impl IntentClassifier {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model: Some(model) }
    }

    /// Classifier whose every call fails with `ModelUnavailable`.
    ///
    /// Used when the model client could not be initialized at startup.
    pub const fn unavailable() -> Self {
        Self { model: None }
    }

    pub fn is_available(&self) -> bool {
        self.model.is_some()
    }

    /// Classify one message with a single completion call.
    #[instrument(skip_all, fields(text_len = text.len()))]
    pub async fn classify(&self, text: &str) -> Result<Intent, ClassificationError> {
        let Some(model) = &self.model else {
            return Err(ClassificationError::ModelUnavailable(
                "language model client not initialized".to_string(),
            ));
        };

        let prompt = build_prompt(text);
        let raw = model.complete(&prompt).await.map_err(|e| {
            warn!(model = model.model_name(), error = %e, "completion call failed");
            ClassificationError::from(e)
        })?;

        debug!(model = model.model_name(), raw_len = raw.len(), "completion received");

        parse_intent(&raw)
    }
}

/// Build the instruction prompt with the user's text embedded verbatim.
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"You are a Home Automation Bot. User said: "{text}"
Classify the intent as 'LAPTOP' (the user wants an action performed on the home laptop or devices) or 'CHAT' (ordinary conversation).
For LAPTOP, put a short machine-friendly command in "command" and leave "reply" empty.
For CHAT, put your answer to the user in "reply" and leave "command" empty.
Output only one JSON object with exactly these fields: {{"intent": "LAPTOP or CHAT", "command": "...", "reply": "..."}}"#
    )
}
