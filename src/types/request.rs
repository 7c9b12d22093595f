//! Parsed inference request model.
//!
//! These types mirror what the serving layer hands over after it has parsed
//! the wire payload. Parsing raw payloads is the serving layer's job; the
//! extraction core only consumes the result.

use serde::{Deserialize, Serialize};

use super::message::Message;

/// Free-text completions payload: a single flat prompt string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionsPayload {
    pub prompt: String,
}

/// Chat completions payload: an ordered sequence of role/content messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionsPayload {
    pub messages: Vec<Message>,
}

/// Request body carrying at most one prompt shape.
///
/// Exclusivity is not enforced here; [`RequestBody::prompt_payload`] applies
/// the documented priority order if both fields are somehow populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completions: Option<CompletionsPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_completions: Option<ChatCompletionsPayload>,
}

/// The prompt shape a [`RequestBody`] resolved to.
///
/// Completions wins over chat completions when both are populated; the
/// priority is decided once, in [`RequestBody::prompt_payload`], rather than
/// scattered across call sites.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptPayload<'a> {
    Completions(&'a str),
    ChatCompletions(&'a [Message]),
    Unset,
}

impl RequestBody {
    pub fn completions(prompt: impl Into<String>) -> Self {
        Self {
            completions: Some(CompletionsPayload {
                prompt: prompt.into(),
            }),
            chat_completions: None,
        }
    }

    pub fn chat_completions(messages: Vec<Message>) -> Self {
        Self {
            completions: None,
            chat_completions: Some(ChatCompletionsPayload { messages }),
        }
    }

    /// Resolve which prompt shape is populated, in priority order.
    pub fn prompt_payload(&self) -> PromptPayload<'_> {
        if let Some(completions) = &self.completions {
            PromptPayload::Completions(&completions.prompt)
        } else if let Some(chat) = &self.chat_completions {
            PromptPayload::ChatCompletions(&chat.messages)
        } else {
            PromptPayload::Unset
        }
    }
}

/// A parsed inference request as handed over by the serving layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<RequestBody>,
}

impl InferenceRequest {
    pub fn with_body(body: RequestBody) -> Self {
        Self { body: Some(body) }
    }
}
