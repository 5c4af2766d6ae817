use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Response};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

use super::types::{
    select_model, GenerateContentRequest, GenerateContentResponse, ListModelsResponse, ModelInfo,
};
use crate::domain::models::GeminiConfig;
use crate::domain::ports::{LanguageModel, LanguageModelError};
use crate::infrastructure::logging::scrub;

const API_VERSION: &str = "v1beta";
const LIST_MODELS_PAGE_SIZE: &str = "1000";

/// Configuration for the Gemini HTTP client
#[derive(Debug, Clone)]
pub struct GeminiClientConfig {
    /// Google AI Studio API key
    pub api_key: String,

    /// Base URL for the Generative Language API
    pub base_url: String,

    /// Model to use; discovered through `ListModels` when `None`
    pub model: Option<String>,

    /// Name tokens preferred during discovery
    pub preferred_model_tokens: Vec<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeminiClientConfig {
    /// Build from the application config; `None` when no API key is set
    pub fn from_config(config: &GeminiConfig) -> Option<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())?;

        Some(Self {
            api_key: api_key.to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            preferred_model_tokens: config.preferred_model_tokens.clone(),
            timeout_secs: config.request_timeout_secs,
        })
    }
}

/// HTTP client for the Gemini `generateContent` API
///
/// Built once at startup and shared by all message handlers; the model is
/// fixed at construction.
pub struct GeminiClient {
    http_client: ReqwestClient,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a client, discovering a model when none is configured
    ///
    /// # Returns
    /// * `Ok(GeminiClient)` - client bound to a concrete model
    /// * `Err(LanguageModelError)` - the key is unusable or discovery failed
    pub async fn connect(config: GeminiClientConfig) -> Result<Self, LanguageModelError> {
        let mut headers = header::HeaderMap::new();
        let mut api_key = header::HeaderValue::from_str(&config.api_key).map_err(|e| {
            LanguageModelError::InvalidConfiguration(format!("Invalid API key: {e}"))
        })?;
        api_key.set_sensitive(true);
        headers.insert("x-goog-api-key", api_key);

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .default_headers(headers)
            .build()
            .map_err(|e| LanguageModelError::InvalidConfiguration(e.to_string()))?;

        let model = match config.model {
            Some(model) => qualified_model_name(&model),
            None => {
                let models = list_models(&http_client, &config.base_url).await?;
                select_model(&models, &config.preferred_model_tokens)
                    .map(|m| m.name.clone())
                    .ok_or(LanguageModelError::NoUsableModel)?
            }
        };

        info!(
            base_url = %config.base_url,
            model = %model,
            timeout_secs = config.timeout_secs,
            "Gemini client initialized"
        );

        Ok(Self {
            http_client,
            base_url: config.base_url,
            model,
        })
    }

    /// Execute a single `generateContent` request
    async fn generate(&self, prompt: &str) -> Result<String, LanguageModelError> {
        let url = format!("{}/{API_VERSION}/{}:generateContent", self.base_url, self.model);
        debug!("POST {}", url);

        let response = self
            .http_client
            .post(&url)
            .json(&GenerateContentRequest::user_prompt(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let response = check_status(response).await?;
        let body: GenerateContentResponse = response.json().await.map_err(transport_error)?;

        body.text()
            .ok_or_else(|| LanguageModelError::EmptyCompletion(body.empty_reason()))
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn complete(&self, prompt: &str) -> Result<String, LanguageModelError> {
        self.generate(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Fetch every model visible to the API key
async fn list_models(
    http_client: &ReqwestClient,
    base_url: &str,
) -> Result<Vec<ModelInfo>, LanguageModelError> {
    let url = format!("{base_url}/{API_VERSION}/models");
    let mut models = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let mut request = http_client
            .get(&url)
            .query(&[("pageSize", LIST_MODELS_PAGE_SIZE)]);
        if let Some(token) = &page_token {
            request = request.query(&[("pageToken", token.as_str())]);
        }

        let response = request.send().await.map_err(transport_error)?;
        let page: ListModelsResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(transport_error)?;

        models.extend(page.models);
        match page.next_page_token.filter(|t| !t.is_empty()) {
            Some(next) => page_token = Some(next),
            None => break,
        }
    }

    debug!(count = models.len(), "listed Gemini models");
    Ok(models)
}

/// Accept `gemini-1.5-flash` as well as `models/gemini-1.5-flash`
fn qualified_model_name(model: &str) -> String {
    let model = model.trim();
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

async fn check_status(response: Response) -> Result<Response, LanguageModelError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unable to read error body".to_string());
    let body = scrub(&body);
    warn!(status = status.as_u16(), body = %body, "Gemini API error");

    Err(LanguageModelError::Api {
        status: status.as_u16(),
        body,
    })
}

fn transport_error(err: reqwest::Error) -> LanguageModelError {
    if err.is_timeout() {
        LanguageModelError::Timeout
    } else {
        LanguageModelError::Transport(scrub(&err.to_string()))
    }
}
