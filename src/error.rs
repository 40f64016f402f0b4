// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types.

/// Application error type shared by the store and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Text generation error: {0}")]
    Generation(String),
}

impl AppError {
    /// Message carried by generation errors caused by HTTP 429.
    pub const GENERATION_RATE_LIMIT: &'static str = "Rate limit exceeded";

    /// Message carried by generation errors when no API key is configured.
    pub const GENERATION_OFFLINE: &'static str = "Text generation not configured (offline mode)";

    /// Whether this is a rate-limit failure from the generation API.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, AppError::Generation(msg) if msg == Self::GENERATION_RATE_LIMIT)
    }

    /// Whether this is a "not found" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
