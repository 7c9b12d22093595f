//! # prompt-extract
//!
//! 从已解析的 LLM 推理请求中提取规范化的提示词字节序列，供前缀匹配与缓存键计算使用。
//!
//! Canonical prompt extraction from parsed LLM inference requests, for use by
//! downstream prefix-matching and cache-key logic.
//!
//! ## Overview
//!
//! An inference request encodes the user-supplied prompt in one of two
//! mutually exclusive shapes: a single free-text completions prompt, or an
//! ordered sequence of chat messages. This crate normalizes both shapes into
//! one canonical byte sequence and derives string and byte-length views from
//! it, so that callers computing cache keys or prefix lengths see identical
//! bytes for identical logical prompts — across calls and across processes.
//!
//! The crate consumes a request that has already been parsed by the serving
//! layer. It never parses wire payloads, never tokenizes, and never caches:
//! it is a pure validation-and-transform step.
//!
//! ## Key Operations
//!
//! | Operation | Description |
//! |-----------|-------------|
//! | [`prompt_bytes`] | Canonical byte encoding of the populated prompt shape |
//! | [`prompt_string`] | Verbatim string view of the same canonical form |
//! | [`prompt_length`] | Byte count of the canonical form |
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Parsed request model (messages, payloads, request body) |
//! | [`extract`] | Shape dispatch and canonical encoding |
//! | [`error`] | Error taxonomy for extraction failures |
//!
//! ## Quick Start
//!
//! ```rust
//! use prompt_extract::{prompt_length, prompt_string, InferenceRequest, Message, RequestBody};
//!
//! let request = InferenceRequest::with_body(RequestBody::chat_completions(vec![
//!     Message::user("hi"),
//!     Message::assistant("hello"),
//! ]));
//!
//! let prompt = prompt_string(Some(&request))?;
//! let length = prompt_length(Some(&request))?;
//! assert_eq!(length, prompt.len());
//! # Ok::<(), prompt_extract::ExtractError>(())
//! ```

pub mod error;
pub mod extract;
pub mod types;

// Re-export main types for convenience
pub use error::ExtractError;
pub use extract::{prompt_bytes, prompt_length, prompt_string};
pub use types::{
    message::Message,
    request::{
        ChatCompletionsPayload, CompletionsPayload, InferenceRequest, PromptPayload, RequestBody,
    },
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ExtractError>;
