//! Editable form state for the app builder view.
//!
//! DESIGN
//! ======
//! All fields are private; the presentation layer mutates them only through
//! the operations below so the feature list can never become empty and the
//! platform is always one of the known deployment targets.
//!
//! Remote calls are split in two: `begin_*` snapshots the request body and
//! issues a [`RequestToken`], `finish_*` folds the transport result back in.
//! The await in between belongs to the caller, which keeps this type free of
//! I/O and lets tests drive overlapping calls deterministically.

use std::fmt;

use serde::Serialize;

use crate::FormError;
use crate::catalog::{Platform, find_template};
use crate::sequence::{RequestSequence, RequestToken};
use crate::wire::{GenerateAppRequest, GenerateAppResponse, SuggestFeaturesRequest, SuggestFeaturesResponse};

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// The two remote actions a user can trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    GenerateApp,
    SuggestFeatures,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerateApp => f.write_str("generate-app"),
            Self::SuggestFeatures => f.write_str("suggest-features"),
        }
    }
}

/// "Last action failed" signal for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ActionFailure {
    pub action: Action,
    pub message: String,
}

/// What happened when a remote result was handed back to the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Outcome {
    /// The response was folded into state.
    Applied,
    /// A newer call to the same action was issued; the result was dropped.
    Stale,
    /// The call failed; prior values were kept and the failure recorded.
    Failed,
}

/// Request snapshot taken by [`FormState::begin_generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingGenerate {
    pub token: RequestToken,
    pub request: GenerateAppRequest,
}

/// Request snapshot taken by [`FormState::begin_suggest`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSuggest {
    pub token: RequestToken,
    pub request: SuggestFeaturesRequest,
}

/// All mutable view state for one builder form.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    app_name: String,
    app_description: String,
    feature_list: Vec<String>,
    generated_code: String,
    platform: Platform,
    last_failure: Option<ActionFailure>,
    #[serde(skip)]
    generate_seq: RequestSequence,
    #[serde(skip)]
    suggest_seq: RequestSequence,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            app_name: String::new(),
            app_description: String::new(),
            feature_list: vec![String::new()],
            generated_code: String::new(),
            platform: Platform::default(),
            last_failure: None,
            generate_seq: RequestSequence::default(),
            suggest_seq: RequestSequence::default(),
        }
    }
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // READS
    // =========================================================================

    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    #[must_use]
    pub fn app_description(&self) -> &str {
        &self.app_description
    }

    #[must_use]
    pub fn feature_list(&self) -> &[String] {
        &self.feature_list
    }

    /// Empty until a generate call succeeds.
    #[must_use]
    pub fn generated_code(&self) -> &str {
        &self.generated_code
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Checklist for the currently selected platform.
    #[must_use]
    pub fn deployment_steps(&self) -> &'static [&'static str] {
        self.platform.steps()
    }

    #[must_use]
    pub fn last_failure(&self) -> Option<&ActionFailure> {
        self.last_failure.as_ref()
    }

    /// `true` while the most recent call for `action` has not finished.
    #[must_use]
    pub fn is_pending(&self, action: Action) -> bool {
        match action {
            Action::GenerateApp => self.generate_seq.is_pending(),
            Action::SuggestFeatures => self.suggest_seq.is_pending(),
        }
    }

    // =========================================================================
    // EDITS
    // =========================================================================

    pub fn set_app_name(&mut self, text: impl Into<String>) {
        self.app_name = text.into();
    }

    pub fn set_app_description(&mut self, text: impl Into<String>) {
        self.app_description = text.into();
    }

    /// Append one blank feature entry.
    pub fn add_feature(&mut self) {
        self.feature_list.push(String::new());
    }

    /// Replace the feature at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::FeatureIndexOutOfRange`] and leaves the list
    /// untouched when `index` is past the end.
    pub fn update_feature(&mut self, index: usize, text: impl Into<String>) -> Result<(), FormError> {
        let len = self.feature_list.len();
        let slot = self
            .feature_list
            .get_mut(index)
            .ok_or(FormError::FeatureIndexOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Overwrite name, description, and features from the named template.
    ///
    /// Unknown names (including the blank "no template" choice) leave the
    /// form unchanged. Returns whether a template was applied.
    pub fn load_template(&mut self, name: &str) -> bool {
        let Some(template) = find_template(name) else {
            return false;
        };
        self.app_name = template.app_name.to_owned();
        self.app_description = template.app_description.to_owned();
        self.feature_list = template.features();
        true
    }

    pub fn set_platform(&mut self, platform: Platform) {
        self.platform = platform;
    }

    // =========================================================================
    // REMOTE ADAPTERS
    // =========================================================================

    /// Snapshot the generate-app body and issue a token for it.
    pub fn begin_generate(&mut self) -> PendingGenerate {
        PendingGenerate {
            token: self.generate_seq.issue(),
            request: GenerateAppRequest {
                app_name: self.app_name.clone(),
                app_description: self.app_description.clone(),
                feature_list: self.feature_list.clone(),
            },
        }
    }

    /// Fold a generate-app result into the form.
    pub fn finish_generate<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: Result<GenerateAppResponse, E>,
    ) -> Outcome {
        if !self.generate_seq.settle(token) {
            return Outcome::Stale;
        }
        match result {
            Ok(response) => {
                self.generated_code = response.into_code();
                self.clear_failure(Action::GenerateApp);
                Outcome::Applied
            }
            Err(error) => self.record_failure(Action::GenerateApp, &error),
        }
    }

    /// Snapshot the suggest-features body and issue a token for it.
    pub fn begin_suggest(&mut self) -> PendingSuggest {
        PendingSuggest {
            token: self.suggest_seq.issue(),
            request: SuggestFeaturesRequest { app_description: self.app_description.clone() },
        }
    }

    /// Fold a suggest-features result into the form.
    ///
    /// A successful response replaces the feature list wholesale; an absent
    /// or empty suggestion resets it to one blank entry.
    pub fn finish_suggest<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: Result<SuggestFeaturesResponse, E>,
    ) -> Outcome {
        if !self.suggest_seq.settle(token) {
            return Outcome::Stale;
        }
        match result {
            Ok(response) => {
                self.feature_list = response.into_feature_list();
                self.clear_failure(Action::SuggestFeatures);
                Outcome::Applied
            }
            Err(error) => self.record_failure(Action::SuggestFeatures, &error),
        }
    }

    fn record_failure(&mut self, action: Action, error: &dyn fmt::Display) -> Outcome {
        self.last_failure = Some(ActionFailure { action, message: error.to_string() });
        Outcome::Failed
    }

    fn clear_failure(&mut self, action: Action) {
        if self.last_failure.as_ref().is_some_and(|f| f.action == action) {
            self.last_failure = None;
        }
    }
}
