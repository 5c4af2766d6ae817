pub mod config;
pub mod intent;
pub mod message;
pub mod queue;

pub use config::{
    Config, FirebaseConfig, GeminiConfig, LivenessConfig, LogFormat, LoggingConfig,
    RotationPolicy, TelegramConfig,
};
pub use intent::{parse_intent, strip_code_fences, Intent, IntentKind, RawIntent, FALLBACK_REPLY};
pub use message::{Ack, InboundMessage, UserIdentity, UNKNOWN_SENDER};
pub use queue::{QueueEntry, QueueStatus};
