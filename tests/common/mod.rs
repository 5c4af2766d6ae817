//! Common test utilities for integration tests
//!
//! Provides in-memory fakes for the language model and queue store ports,
//! plus helpers shared across integration test files.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use courier::domain::models::QueueEntry;
use courier::domain::ports::{LanguageModel, LanguageModelError, QueueStore, QueueStoreError};
use courier::services::{CommandDispatcher, IntentClassifier, MessageHandler};

/// Language model that replays scripted completions in order
///
/// Once the script is exhausted every call fails with `EmptyCompletion`.
#[allow(dead_code)]
pub struct ScriptedModel {
    responses: Mutex<VecDeque<Result<String, LanguageModelError>>>,
    prompts: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

#[allow(dead_code)]
impl ScriptedModel {
    pub fn new(responses: Vec<Result<String, LanguageModelError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Model that answers every listed completion successfully
    pub fn replying(completions: &[&str]) -> Self {
        Self::new(completions.iter().map(|c| Ok((*c).to_string())).collect())
    }

    /// Sleep before each answer, to force overlapping calls
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, prompt: &str) -> Result<String, LanguageModelError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LanguageModelError::EmptyCompletion("script exhausted".into())))
    }

    fn model_name(&self) -> &str {
        "models/scripted"
    }
}

/// Queue store that keeps entries in memory under random keys
#[allow(dead_code)]
#[derive(Default)]
pub struct InMemoryQueueStore {
    entries: Mutex<Vec<(String, QueueEntry)>>,
    fail_with_status: Option<u16>,
}

#[allow(dead_code)]
impl InMemoryQueueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose every push is rejected with the given HTTP status
    pub fn failing(status: u16) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail_with_status: Some(status),
        }
    }

    pub fn entries(&self) -> Vec<(String, QueueEntry)> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueueStore for InMemoryQueueStore {
    async fn push(&self, entry: &QueueEntry) -> Result<String, QueueStoreError> {
        if let Some(status) = self.fail_with_status {
            return Err(QueueStoreError::Api {
                status,
                body: "rejected".to_string(),
            });
        }
        let key = format!("-N{}", uuid::Uuid::new_v4().simple());
        self.entries.lock().unwrap().push((key.clone(), entry.clone()));
        Ok(key)
    }
}

/// Wire a message handler over the given fakes
#[allow(dead_code)]
pub fn handler_with(model: Arc<ScriptedModel>, store: Arc<InMemoryQueueStore>) -> MessageHandler {
    MessageHandler::new(IntentClassifier::new(model), CommandDispatcher::new(store))
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
