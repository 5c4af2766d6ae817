//! Startup wiring: builds the adapters once and runs the bot

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::models::{Config, GeminiConfig};
use crate::domain::ports::{LanguageModel, QueueStore};
use crate::infrastructure::firebase::{
    self, FirebaseQueueStore, ServiceAccountKey, ServiceAccountTokenSource, INLINE_CREDENTIALS_ENV,
};
use crate::infrastructure::gemini::{GeminiClient, GeminiClientConfig};
use crate::infrastructure::liveness;
use crate::infrastructure::telegram::TelegramBot;
use crate::services::{CommandDispatcher, IntentClassifier, MessageHandler};

/// The assembled bot: message pipeline plus its transport settings
pub struct Relay {
    config: Config,
    handler: Arc<MessageHandler>,
}

impl Relay {
    /// Build all adapters from validated configuration
    ///
    /// An unusable language model only degrades the bot; missing Firebase
    /// credentials are fatal.
    pub async fn build(config: Config) -> Result<Self> {
        let classifier = build_classifier(&config.gemini).await;
        let store = build_queue_store(&config).await?;

        let handler = Arc::new(MessageHandler::new(
            classifier,
            CommandDispatcher::new(store),
        ));

        Ok(Self { config, handler })
    }

    /// Assemble a relay from pre-built ports
    pub fn with_ports(
        config: Config,
        model: Option<Arc<dyn LanguageModel>>,
        store: Arc<dyn QueueStore>,
    ) -> Self {
        let classifier = model.map_or_else(IntentClassifier::unavailable, IntentClassifier::new);
        let handler = Arc::new(MessageHandler::new(classifier, CommandDispatcher::new(store)));
        Self { config, handler }
    }

    pub fn handler(&self) -> Arc<MessageHandler> {
        Arc::clone(&self.handler)
    }

    /// Serve liveness in the background and poll Telegram until Ctrl-C
    pub async fn run(self) -> Result<()> {
        let token = self
            .config
            .telegram
            .token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .context("Telegram token is missing")?;

        let liveness = liveness::spawn(self.config.liveness.clone());

        info!("courier started");
        TelegramBot::new(token, Arc::clone(&self.handler)).run().await;

        liveness.abort();
        info!("courier stopped");
        Ok(())
    }
}

async fn build_classifier(config: &GeminiConfig) -> IntentClassifier {
    let Some(client_config) = GeminiClientConfig::from_config(config) else {
        warn!("GEMINI_API_KEY not set; every message will get the model-unavailable reply");
        return IntentClassifier::unavailable();
    };

    match GeminiClient::connect(client_config).await {
        Ok(client) => IntentClassifier::new(Arc::new(client)),
        Err(e) => {
            warn!(error = %e, "Gemini client unavailable; continuing without a language model");
            IntentClassifier::unavailable()
        }
    }
}

async fn build_queue_store(config: &Config) -> Result<Arc<dyn QueueStore>> {
    let inline = std::env::var(INLINE_CREDENTIALS_ENV).ok();
    let key = ServiceAccountKey::load(&config.firebase.credentials_path, inline.as_deref())
        .context("Failed to load Firebase credentials")?;

    info!(
        client_email = %key.client_email,
        project_id = ?key.project_id,
        "loaded Firebase service account"
    );

    let http_client = firebase::http_client(config.firebase.request_timeout_secs)?;
    let tokens = ServiceAccountTokenSource::new(&key, http_client.clone())?;
    let store = FirebaseQueueStore::new(
        &config.firebase.database_url,
        &config.firebase.queue_path,
        http_client,
        Arc::new(tokens),
    );

    info!(push_url = %store.push_url(), "Firebase queue store ready");
    Ok(Arc::new(store))
}
