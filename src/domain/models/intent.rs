//! Classified intent of a single user message
//!
//! The language model answers with free text that is supposed to contain a
//! JSON object `{"intent": ..., "command": ..., "reply": ...}`. This module
//! owns the normalization of that text and its validation into [`Intent`],
//! the only shape the rest of the pipeline ever sees.

use serde_json::{Map, Value};

use crate::domain::errors::ClassificationError;

/// Reply used when the model chose (or implied) chat but gave nothing to say.
pub const FALLBACK_REPLY: &str = "🤔 Sorry, I didn't quite get that. Could you rephrase?";

/// Markdown fence delimiters stripped from model output, longest first.
const FENCE_DELIMITERS: [&str; 2] = ["```json", "```"];

/// Classified purpose of a user message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Automation command to queue for the executor
    Laptop { command: String },
    /// Conversational reply to send straight back
    Chat { reply: String },
    /// `intent` missing or outside the known set; handled as chat
    Unrecognized { reply: Option<String> },
}

impl Intent {
    /// Short label for logs
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Laptop { .. } => "LAPTOP",
            Self::Chat { .. } => "CHAT",
            Self::Unrecognized { .. } => "UNRECOGNIZED",
        }
    }
}

/// The two intent values the model is asked to choose from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    Laptop,
    Chat,
}

impl IntentKind {
    /// Parse the `intent` field
    ///
    /// Only the exact upper-case values are accepted. Anything else, including
    /// `"laptop"` or `" LAPTOP "`, is not a known intent and must never queue
    /// a command.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "LAPTOP" => Some(Self::Laptop),
            "CHAT" => Some(Self::Chat),
            _ => None,
        }
    }
}

/// Fields extracted from the model's JSON object, before validation
///
/// Non-string values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawIntent {
    pub intent: Option<String>,
    pub command: Option<String>,
    pub reply: Option<String>,
}

impl RawIntent {
    fn from_object(object: &Map<String, Value>) -> Self {
        let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            intent: field("intent"),
            command: field("command"),
            reply: field("reply"),
        }
    }

    /// Validate into the tagged [`Intent`]
    ///
    /// A `LAPTOP` intent with a missing or blank command cannot be queued and
    /// is rejected as malformed; otherwise the command is kept verbatim. A
    /// `CHAT` intent without a reply gets [`FALLBACK_REPLY`].
    pub fn validate(self) -> Result<Intent, ClassificationError> {
        let reply = self.reply.filter(|r| !r.trim().is_empty());

        match self.intent.as_deref().and_then(IntentKind::parse) {
            Some(IntentKind::Laptop) => {
                let command = self
                    .command
                    .filter(|c| !c.trim().is_empty())
                    .ok_or_else(|| {
                        ClassificationError::MalformedOutput(
                            "LAPTOP intent without a command".to_string(),
                        )
                    })?;
                Ok(Intent::Laptop { command })
            }
            Some(IntentKind::Chat) => Ok(Intent::Chat {
                reply: reply.unwrap_or_else(|| FALLBACK_REPLY.to_string()),
            }),
            None => Ok(Intent::Unrecognized { reply }),
        }
    }
}

/// Remove markdown code-fence delimiters and surrounding whitespace
///
/// Delimiters are removed until none remain, so the result never contains
/// a fence and normalizing twice yields the same text.
pub fn strip_code_fences(raw: &str) -> String {
    let mut text = raw.to_owned();
    loop {
        let stripped = FENCE_DELIMITERS
            .iter()
            .fold(text.clone(), |acc, fence| acc.replace(fence, ""));
        if stripped == text {
            break;
        }
        text = stripped;
    }
    text.trim().to_owned()
}

/// Normalize, parse and validate raw model output into an [`Intent`]
pub fn parse_intent(raw: &str) -> Result<Intent, ClassificationError> {
    let normalized = strip_code_fences(raw);
    if normalized.is_empty() {
        return Err(ClassificationError::MalformedOutput(
            "model output is empty".to_string(),
        ));
    }

    let value: Value = serde_json::from_str(&normalized)
        .map_err(|e| ClassificationError::MalformedOutput(format!("invalid JSON: {e}")))?;

    let Value::Object(object) = value else {
        return Err(ClassificationError::MalformedOutput(format!(
            "expected a JSON object, got {}",
            json_type_name(&value)
        )));
    };

    RawIntent::from_object(&object).validate()
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
