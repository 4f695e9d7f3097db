//! JSON bodies for the two remote endpoints.
//!
//! Field names are camelCase on the wire. Response fields the endpoints may
//! omit are `Option` so a missing or `null` value folds into the documented
//! fallback instead of failing the decode; unknown fields are ignored.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

/// Path of the code generation endpoint, relative to the API base URL.
pub const GENERATE_APP_PATH: &str = "/api/generate-app";
/// Path of the feature suggestion endpoint, relative to the API base URL.
pub const SUGGEST_FEATURES_PATH: &str = "/api/suggest-features";

/// `POST /api/generate-app` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAppRequest {
    pub app_name: String,
    pub app_description: String,
    pub feature_list: Vec<String>,
}

/// `POST /api/generate-app` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateAppResponse {
    #[serde(default)]
    pub code: Option<String>,
}

impl GenerateAppResponse {
    /// Generated code, with an absent field normalised to empty text.
    #[must_use]
    pub fn into_code(self) -> String {
        self.code.unwrap_or_default()
    }
}

/// `POST /api/suggest-features` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestFeaturesRequest {
    pub app_description: String,
}

/// `POST /api/suggest-features` response body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestFeaturesResponse {
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl SuggestFeaturesResponse {
    /// Suggested features; absent or empty becomes a single blank entry.
    #[must_use]
    pub fn into_feature_list(self) -> Vec<String> {
        match self.features {
            Some(features) if !features.is_empty() => features,
            _ => vec![String::new()],
        }
    }
}
