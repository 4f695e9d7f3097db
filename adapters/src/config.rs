//! Endpoint configuration parsed from environment variables.

use super::types::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_VAR: &str = "APP_BUILDER_BASE_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "APP_BUILDER_REQUEST_TIMEOUT_SECS";
pub const CONNECT_TIMEOUT_VAR: &str = "APP_BUILDER_CONNECT_TIMEOUT_SECS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for ApiTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeouts: ApiTimeouts,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: ApiTimeouts::default() }
    }
}

impl ApiConfig {
    /// Build typed endpoint config from environment variables.
    ///
    /// Optional:
    /// - `APP_BUILDER_BASE_URL`: default `http://127.0.0.1:3000`
    /// - `APP_BUILDER_REQUEST_TIMEOUT_SECS`: default 120
    /// - `APP_BUILDER_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] when the base URL is not http(s).
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] over an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] when the base URL is not http(s).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(lookup(BASE_URL_VAR).as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let timeouts = ApiTimeouts {
            request_secs: parse_u64(lookup(REQUEST_TIMEOUT_VAR), DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_u64(lookup(CONNECT_TIMEOUT_VAR), DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(Self { base_url, timeouts })
    }

    /// Replace the base URL, e.g. from a command-line flag.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigParse`] when the URL is not http(s).
    pub fn with_base_url(mut self, raw: &str) -> Result<Self, ApiError> {
        self.base_url = normalize_base_url(raw)?;
        Ok(self)
    }
}

fn parse_u64(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn normalize_base_url(raw: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Ok(trimmed.to_owned());
    }
    Err(ApiError::ConfigParse(format!("invalid base URL '{raw}' (expected http:// or https://)")))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
