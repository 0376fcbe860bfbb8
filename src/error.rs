//! Error types for verse-forge operations.
//!
//! The instruction compiler is a total function and has no error cases of its
//! own; everything here belongs to the generation client or the surrounding
//! shell (credential intake, export-file writing).

use thiserror::Error;

/// Errors that can occur while generating a poem.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Missing API key: OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("Failed to initialize the generation model: {0}")]
    ModelInitialization(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse model response: {0}")]
    ParseError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("API error ({code}): {message}")]
    ApiError { code: u16, message: String },

    #[error("Model returned no completion choices")]
    EmptyResponse,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
