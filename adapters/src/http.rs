//! HTTP implementation of [`BuilderApi`] over `reqwest`.
//!
//! Each call is a single JSON POST with no retry. Non-2xx responses and
//! bodies that do not decode are returned as distinct [`ApiError`] variants.

use std::time::Duration;

use builder::wire::{GENERATE_APP_PATH, SUGGEST_FEATURES_PATH};
use builder::{GenerateAppRequest, GenerateAppResponse, SuggestFeaturesRequest, SuggestFeaturesResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use super::types::{ApiError, BuilderApi};

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

pub struct HttpBuilderApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBuilderApi {
    /// Build a client with the configured base URL and timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if `reqwest` cannot build a client.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post_json<R: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<R, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(ApiError::Response { status: status.as_u16(), body: text });
        }
        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl BuilderApi for HttpBuilderApi {
    async fn generate_app(&self, request: &GenerateAppRequest) -> Result<GenerateAppResponse, ApiError> {
        self.post_json(GENERATE_APP_PATH, request).await
    }

    async fn suggest_features(&self, request: &SuggestFeaturesRequest) -> Result<SuggestFeaturesResponse, ApiError> {
        self.post_json(SUGGEST_FEATURES_PATH, request).await
    }
}
