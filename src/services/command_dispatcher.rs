//! Command dispatcher service.
//!
//! Acts on a classified [`Intent`]: automation commands become new pending
//! entries in the shared queue, everything else is answered directly.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument};

use crate::domain::errors::DispatchError;
use crate::domain::models::{Ack, Intent, QueueEntry, UserIdentity, FALLBACK_REPLY};
use crate::domain::ports::QueueStore;

/// Turns intents into queue writes or direct replies.
#[derive(Clone)]
pub struct CommandDispatcher {
    store: Arc<dyn QueueStore>,
}

impl CommandDispatcher {
    pub fn new(store: Arc<dyn QueueStore>) -> Self {
        Self { store }
    }

    /// Dispatch one intent. Consumes it; nothing is kept between calls.
    #[instrument(skip_all, fields(intent = intent.label(), sender = %sender.display_name))]
    pub async fn dispatch(&self, intent: Intent, sender: &UserIdentity) -> Result<Ack, DispatchError> {
        match intent {
            Intent::Laptop { command } => {
                let entry = QueueEntry::pending(
                    command.clone(),
                    sender.display_name.clone(),
                    Utc::now().timestamp(),
                );
                let key = self.store.push(&entry).await?;
                info!(%key, command = %command, "command queued");
                Ok(Ack::Queued { key, command })
            }
            Intent::Chat { reply } => Ok(Ack::Replied { text: reply }),
            Intent::Unrecognized { reply } => Ok(Ack::Replied {
                text: reply.unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            }),
        }
    }
}
