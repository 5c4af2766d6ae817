/// Display name used when the chat platform does not identify the sender.
pub const UNKNOWN_SENDER: &str = "unknown";

/// Who sent a message, as far as the chat platform tells us
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserIdentity {
    /// Human-readable name, copied into queue entries for audit
    pub display_name: String,
    /// Platform user id, for logs only
    pub id: Option<u64>,
    /// Platform handle, for logs only
    pub username: Option<String>,
}

impl UserIdentity {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            id: None,
            username: None,
        }
    }

    /// Build an identity from the optional parts a chat update carries
    ///
    /// A missing or blank first name falls back to the username, then to
    /// [`UNKNOWN_SENDER`].
    pub fn from_parts(id: Option<u64>, first_name: Option<&str>, username: Option<&str>) -> Self {
        let non_blank = |s: &&str| !s.trim().is_empty();
        let display_name = first_name
            .filter(non_blank)
            .or_else(|| username.filter(non_blank))
            .unwrap_or(UNKNOWN_SENDER)
            .to_string();

        Self {
            display_name,
            id,
            username: username.map(str::to_owned),
        }
    }
}

/// One inbound text message handed over by the chat adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub text: String,
    pub sender: UserIdentity,
}

impl InboundMessage {
    pub fn new(text: impl Into<String>, sender: UserIdentity) -> Self {
        Self {
            text: text.into(),
            sender,
        }
    }
}

/// Outcome of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ack {
    /// The command was appended to the queue under `key`
    Queued { key: String, command: String },
    /// A conversational reply, no queue interaction
    Replied { text: String },
}

impl Ack {
    /// Text to send back to the user
    pub fn reply_text(&self) -> String {
        match self {
            Self::Queued { command, .. } => format!("✅ Order Sent: `{command}`"),
            Self::Replied { text } => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_prefers_first_name() {
        let sender = UserIdentity::from_parts(Some(42), Some("Atif"), Some("atif_h"));
        assert_eq!(sender.display_name, "Atif");
        assert_eq!(sender.id, Some(42));
        assert_eq!(sender.username.as_deref(), Some("atif_h"));
    }

    #[test]
    fn test_identity_falls_back_to_username_then_unknown() {
        let sender = UserIdentity::from_parts(None, Some("  "), Some("atif_h"));
        assert_eq!(sender.display_name, "atif_h");

        let sender = UserIdentity::from_parts(None, None, None);
        assert_eq!(sender.display_name, UNKNOWN_SENDER);
    }

    #[test]
    fn test_queued_ack_echoes_command() {
        let ack = Ack::Queued {
            key: "-Nabc".to_string(),
            command: "lights_off".to_string(),
        };
        assert_eq!(ack.reply_text(), "✅ Order Sent: `lights_off`");
    }

    #[test]
    fn test_replied_ack_is_verbatim() {
        let ack = Ack::Replied {
            text: "I'm good!".to_string(),
        };
        assert_eq!(ack.reply_text(), "I'm good!");
    }
}
