//! Message handler: the classify-then-dispatch pipeline for one message.
//!
//! Every inbound message produces exactly one reply text. Failures are
//! logged with their cause and answered with a fixed, generic reply so that
//! no model output or store error ever reaches the user.

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::domain::errors::{ClassificationError, DispatchError};
use crate::domain::models::InboundMessage;
use crate::services::{CommandDispatcher, IntentClassifier};

/// Reply when no language model can be reached.
pub const MODEL_UNAVAILABLE_REPLY: &str = "❌ AI brain unavailable. Please try again later.";

/// Reply for malformed model output and queue failures.
pub const PROCESSING_ERROR_REPLY: &str = "⚠️ Error processing request.";

/// Runs the classifier and dispatcher for each inbound message.
#[derive(Clone)]
pub struct MessageHandler {
    classifier: IntentClassifier,
    dispatcher: CommandDispatcher,
}

impl MessageHandler {
    pub const fn new(classifier: IntentClassifier, dispatcher: CommandDispatcher) -> Self {
        Self {
            classifier,
            dispatcher,
        }
    }

    /// Handle one message and return the single reply to send back.
    pub async fn handle(&self, message: &InboundMessage) -> String {
        let span = info_span!(
            "message",
            message_id = %Uuid::new_v4(),
            sender = %message.sender.display_name,
            sender_id = ?message.sender.id,
        );

        async {
            info!(text = %message.text, "message received");

            let intent = match self.classifier.classify(&message.text).await {
                Ok(intent) => intent,
                Err(err) => return classification_failure_reply(&err),
            };

            info!(intent = intent.label(), "message classified");

            match self.dispatcher.dispatch(intent, &message.sender).await {
                Ok(ack) => ack.reply_text(),
                Err(err) => dispatch_failure_reply(&err),
            }
        }
        .instrument(span)
        .await
    }
}

fn classification_failure_reply(err: &ClassificationError) -> String {
    match err {
        ClassificationError::ModelUnavailable(reason) => {
            error!(%reason, "language model unavailable");
            MODEL_UNAVAILABLE_REPLY.to_string()
        }
        ClassificationError::MalformedOutput(reason) => {
            warn!(%reason, "model output rejected");
            PROCESSING_ERROR_REPLY.to_string()
        }
    }
}

fn dispatch_failure_reply(err: &DispatchError) -> String {
    match err {
        DispatchError::PersistenceFailed(reason) => {
            error!(%reason, "failed to queue command");
            PROCESSING_ERROR_REPLY.to_string()
        }
    }
}
