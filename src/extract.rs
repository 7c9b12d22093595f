//! 提示词规范化提取：形状分派与规范化编码。
//!
//! # Extraction Module
//!
//! Shape dispatch and canonical encoding. The three operations here are
//! layered views over one computation: [`prompt_bytes`] produces the
//! canonical byte form, [`prompt_string`] and [`prompt_length`] derive the
//! string and byte-count views with the same error behavior.
//!
//! ## Canonical encoding
//!
//! Completions prompts pass through verbatim, byte for byte. Chat message
//! sequences are encoded as compact JSON: struct fields serialize in
//! declaration order (`role`, then `content`) and arrays preserve message
//! order, so identical logical input yields byte-identical output on every
//! call and in every process. No map types appear anywhere on the serialized
//! path. Callers compare and cache these bytes by value; the encoding must
//! never change shape between releases.

use bytes::Bytes;

use crate::error::ExtractError;
use crate::types::request::{InferenceRequest, PromptPayload};

/// Walk the request down to its populated prompt shape.
fn resolve(request: Option<&InferenceRequest>) -> Result<PromptPayload<'_>, ExtractError> {
    let request = request.ok_or(ExtractError::NilRequest)?;
    let body = request.body.as_ref().ok_or(ExtractError::NilBody)?;
    Ok(body.prompt_payload())
}

/// Returns the canonical byte representation of the user-provided prompt.
///
/// For completions requests this is the raw prompt string bytes, verbatim.
/// For chat completions requests the message sequence is JSON encoded to
/// retain ordering and content. An empty completions prompt yields empty
/// bytes and an empty message sequence yields the canonical empty-array
/// encoding; neither is an error.
///
/// Pure function of its input: no side effects, no logging, no retries.
pub fn prompt_bytes(request: Option<&InferenceRequest>) -> Result<Bytes, ExtractError> {
    match resolve(request)? {
        PromptPayload::Completions(prompt) => Ok(Bytes::copy_from_slice(prompt.as_bytes())),
        PromptPayload::ChatCompletions(messages) => {
            Ok(Bytes::from(serde_json::to_vec(messages)?))
        }
        PromptPayload::Unset => Err(ExtractError::UnsupportedInputs),
    }
}

/// Returns the prompt in string form.
///
/// Both prompt sources are UTF-8 by type, so this is the verbatim string
/// view of the bytes [`prompt_bytes`] returns, with the same error behavior.
pub fn prompt_string(request: Option<&InferenceRequest>) -> Result<String, ExtractError> {
    match resolve(request)? {
        PromptPayload::Completions(prompt) => Ok(prompt.to_owned()),
        PromptPayload::ChatCompletions(messages) => Ok(serde_json::to_string(messages)?),
        PromptPayload::Unset => Err(ExtractError::UnsupportedInputs),
    }
}

/// Returns the number of bytes in the prompt payload, as used for prefix
/// cache computations.
///
/// Byte count, not character count: downstream prefix matching operates on
/// the canonical bytes.
pub fn prompt_length(request: Option<&InferenceRequest>) -> Result<usize, ExtractError> {
    Ok(prompt_bytes(request)?.len())
}
