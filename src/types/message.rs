//! Chat message records as produced by the upstream request parser.

use serde::{Deserialize, Serialize};

/// A single chat message.
///
/// Field order is canonical: `role` before `content`. The canonical prompt
/// encoding serializes fields in declaration order, and cache keys derived
/// downstream depend on that order never changing.
///
/// Roles are carried as plain strings; this crate checks structural presence
/// only and attaches no meaning to role values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }
}
