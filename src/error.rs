use thiserror::Error;

/// Error type for prompt extraction.
///
/// All variants are terminal at this layer: the extractor performs no retries,
/// no logging, and no recovery. The kinds are distinguished so callers can
/// treat request-shaped failures differently from encoder failures.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The request reference itself was absent.
    #[error("inference request is nil")]
    NilRequest,

    /// The request was present but carried no body.
    #[error("inference request body is nil")]
    NilBody,

    /// The body carried neither a completions nor a chat completions payload.
    #[error("inference request body is missing completions or chat completions inputs")]
    UnsupportedInputs,

    /// The chat message sequence could not be encoded; wraps the encoder
    /// cause for diagnostics.
    #[error("failed to serialize chat completion messages: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtractError {
    /// Whether the failure is attributable to the shape of the incoming
    /// request rather than to the encoder.
    ///
    /// Serving layers typically map client errors to a 4xx-class response and
    /// everything else to an internal error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ExtractError::NilRequest | ExtractError::NilBody | ExtractError::UnsupportedInputs
        )
    }
}
