//! Firebase Realtime Database adapter for the [`QueueStore`](crate::domain::ports::QueueStore) port
//!
//! Authentication uses a Google service-account key exchanged for short-lived
//! OAuth access tokens.

pub mod client;
pub mod credentials;
pub mod token;

pub use client::{http_client, FirebaseQueueStore};
pub use credentials::{CredentialsError, ServiceAccountKey, INLINE_CREDENTIALS_ENV};
pub use token::{AccessTokenSource, ServiceAccountTokenSource, StaticToken, FIREBASE_SCOPES};
