//! HTTP liveness endpoint for hosting platforms

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::domain::models::LivenessConfig;

/// Body returned by `GET /`
pub const LIVENESS_BODY: &str = "🤖 Cloud Bot is Running 24/7!";

pub fn router() -> Router {
    Router::new().route("/", get(|| async { LIVENESS_BODY }))
}

/// Bind the liveness listener and serve until the task is dropped
pub async fn serve(config: &LivenessConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind liveness endpoint on {addr}"))?;

    info!("Liveness endpoint listening on {}", addr);

    axum::serve(listener, router()).await?;
    Ok(())
}

/// Run the liveness endpoint in the background
///
/// A bind or serve failure is logged and does not stop the bot.
pub fn spawn(config: LivenessConfig) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = serve(&config).await {
            error!(error = ?e, "liveness endpoint stopped");
        }
    })
}
