//! 类型系统模块：定义已解析推理请求的数据模型。
//!
//! # Types Module
//!
//! This module defines the parsed-request data model consumed by the
//! extraction core. The serving layer owns these objects for the lifetime of
//! a single inbound request; the core reads them and never mutates them.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and content |
//! | [`InferenceRequest`] | Parsed request with an optional body |
//! | [`RequestBody`] | Body carrying at most one prompt shape |
//! | [`PromptPayload`] | The prompt shape a body resolved to |
//!
//! ## Submodules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`message`] | Chat message records |
//! | [`request`] | Request, body, and payload types |

pub mod message;
pub mod request;

pub use message::Message;
pub use request::{
    ChatCompletionsPayload, CompletionsPayload, InferenceRequest, PromptPayload, RequestBody,
};
