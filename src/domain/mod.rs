//! Domain layer for the courier relay
//!
//! This module contains the intent and queue models, the port traits that
//! infrastructure adapters implement, and the domain error types.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ClassificationError, DispatchError};
