//! Adapter error type and the transport trait.

use builder::{GenerateAppRequest, GenerateAppResponse, SuggestFeaturesRequest, SuggestFeaturesResponse};

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by adapter configuration and remote calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, body read).
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {status}: {body}")]
    Response { status: u16, body: String },

    /// The response body was not the expected JSON.
    #[error("response parse failed: {0}")]
    Parse(String),
}

impl ApiError {
    /// Stable code for logs and machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::HttpClientBuild(_) => "E_HTTP_CLIENT_BUILD",
            Self::Request(_) => "E_REQUEST",
            Self::Response { .. } => "E_RESPONSE",
            Self::Parse(_) => "E_PARSE",
        }
    }

    /// Whether a retry could plausibly succeed. Adapters never retry on their
    /// own; this is for callers deciding what to tell the user.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Response { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// TRANSPORT TRAIT
// =============================================================================

/// Transport for the two builder endpoints. Enables mocking in tests.
#[async_trait::async_trait]
pub trait BuilderApi: Send + Sync {
    /// `POST /api/generate-app`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails, the endpoint answers
    /// with a non-success status, or the body is not valid JSON.
    async fn generate_app(&self, request: &GenerateAppRequest) -> Result<GenerateAppResponse, ApiError>;

    /// `POST /api/suggest-features`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BuilderApi::generate_app`].
    async fn suggest_features(&self, request: &SuggestFeaturesRequest) -> Result<SuggestFeaturesResponse, ApiError>;
}
