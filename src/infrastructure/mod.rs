//! Infrastructure layer module
//!
//! This module contains the adapters to external systems:
//! - Gemini language model client
//! - Firebase Realtime Database queue store
//! - Telegram long-polling bot
//! - Liveness HTTP endpoint
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod firebase;
pub mod gemini;
pub mod liveness;
pub mod logging;
pub mod telegram;
