//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty stdout output
//! - Optional rolling JSON log files
//! - Secret scrubbing for upstream error bodies

pub mod logger;
pub mod secret_scrubbing;

pub use logger::{parse_log_level, LoggerImpl};
pub use secret_scrubbing::{scrub, SecretScrubber};
