// Integration tests for logging functionality
// Note: the logger installs a global subscriber, so this binary holds a single test

use courier::domain::models::{LogFormat, LoggingConfig, RotationPolicy};
use courier::infrastructure::logging::{scrub, LoggerImpl};
use std::fs;
use tempfile::TempDir;
use tracing::{info, instrument, warn};

#[test]
fn test_logging_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();

    let config = LoggingConfig {
        level: "info".to_string(),
        format: LogFormat::Json,
        log_dir: Some(temp_dir.path().to_path_buf()),
        rotation: RotationPolicy::Never,
    };

    let logger = LoggerImpl::init(&config).unwrap();

    info!(command = "lights_off", "Test message with fields");
    warn!(body = %scrub("Bearer ya29.secret-token"), "upstream error");

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        handle_message("turn off the lights").await;
    });

    // A second subscriber cannot be installed
    assert!(LoggerImpl::init(&config).is_err());

    // Dropping the guard flushes the background writer
    drop(logger);

    let log_path = temp_dir.path().join("courier.log");
    let contents = fs::read_to_string(&log_path).unwrap();

    let lines: Vec<serde_json::Value> = contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("each log line is JSON"))
        .collect();

    assert!(lines
        .iter()
        .any(|l| l["fields"]["message"] == "Test message with fields"
            && l["fields"]["command"] == "lights_off"));
    assert!(lines
        .iter()
        .any(|l| l["fields"]["message"] == "message handled"
            && l["span"]["name"] == "handle_message"));
    assert!(!contents.contains("ya29.secret-token"));
}

#[instrument]
async fn handle_message(text: &str) {
    info!("message handled");
}
