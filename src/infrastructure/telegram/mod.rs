//! Telegram long-polling adapter
//!
//! Text messages are handed to the [`MessageHandler`] and its reply is sent
//! back to the originating chat. Updates from one chat are processed in
//! order; different chats are processed concurrently.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::User;
use tracing::{debug, error, info, warn};

use crate::domain::models::{InboundMessage, UserIdentity};
use crate::services::{MessageHandler, PROCESSING_ERROR_REPLY};

/// Telegram bot bound to a message handler
pub struct TelegramBot {
    bot: Bot,
    handler: Arc<MessageHandler>,
}

impl TelegramBot {
    pub fn new(token: &str, handler: Arc<MessageHandler>) -> Self {
        Self {
            bot: Bot::new(token),
            handler,
        }
    }

    /// Poll for updates until Ctrl-C
    pub async fn run(self) {
        info!("Telegram polling started");

        let schema = Update::filter_message()
            .filter_map(|msg: Message| inbound_message(&msg))
            .endpoint(answer);

        Dispatcher::builder(self.bot, schema)
            .dependencies(dptree::deps![self.handler])
            .default_handler(|update| async move {
                debug!(update_id = ?update.id, "ignoring non-text update");
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "Error in Telegram update handler",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Telegram polling stopped");
    }
}

async fn answer(
    bot: Bot,
    msg: Message,
    inbound: InboundMessage,
    handler: Arc<MessageHandler>,
) -> ResponseResult<()> {
    let reply = handler.handle(&inbound).await;
    let chat_id = msg.chat.id;

    let delivered = deliver(reply, |text| {
        let bot = bot.clone();
        async move { bot.send_message(chat_id, text).await.map(|_| ()) }
    })
    .await;

    if let Err(e) = delivered {
        error!(chat_id = chat_id.0, error = %e, "failed to send fallback Telegram reply");
    }
    Ok(())
}

/// Send `reply`, falling back to [`PROCESSING_ERROR_REPLY`] once if it is rejected
///
/// Telegram refuses some replies outright, e.g. texts over 4096 characters.
/// The user still gets exactly one message in that case.
pub async fn deliver<F, Fut, E>(reply: String, mut send: F) -> Result<(), E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: Display,
{
    match send(reply).await {
        Ok(()) => Ok(()),
        Err(e) => {
            warn!(error = %e, "Telegram rejected reply; sending fallback");
            send(PROCESSING_ERROR_REPLY.to_string()).await
        }
    }
}

/// Extract the handler input from a Telegram message
///
/// Returns `None` for non-text messages and bot commands such as `/start`.
pub fn inbound_message(msg: &Message) -> Option<InboundMessage> {
    to_inbound(msg.text(), msg.from.as_ref())
}

fn to_inbound(text: Option<&str>, from: Option<&User>) -> Option<InboundMessage> {
    let text = text?;
    if text.starts_with('/') {
        return None;
    }

    let sender = match from {
        Some(user) => UserIdentity::from_parts(
            Some(user.id.0),
            Some(user.first_name.as_str()),
            user.username.as_deref(),
        ),
        None => UserIdentity::from_parts(None, None, None),
    };

    Some(InboundMessage::new(text, sender))
}
