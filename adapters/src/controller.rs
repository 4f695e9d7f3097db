//! View controller: owns the form and runs the remote adapters against it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The presentation layer edits fields through [`BuilderController::form_mut`]
//! and triggers remote actions through the async methods here. Each action
//! snapshots its request at invocation, awaits the transport, then folds the
//! result back. Transport errors never escape: they are logged and recorded
//! as the form's last failure, with every prior value left in place.

use std::sync::Arc;

use builder::{Action, FormState, Outcome};
use tracing::{debug, info, warn};

use super::types::BuilderApi;

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;

pub struct BuilderController {
    form: FormState,
    api: Arc<dyn BuilderApi>,
}

impl BuilderController {
    #[must_use]
    pub fn new(api: Arc<dyn BuilderApi>) -> Self {
        Self::with_form(api, FormState::new())
    }

    #[must_use]
    pub fn with_form(api: Arc<dyn BuilderApi>, form: FormState) -> Self {
        Self { form, api }
    }

    #[must_use]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    #[must_use]
    pub fn into_form(self) -> FormState {
        self.form
    }

    /// Send the current name, description, and features to `generate-app`
    /// and store the returned code.
    pub async fn generate_app(&mut self) -> Outcome {
        let pending = self.form.begin_generate();
        let token = pending.token.value();
        info!(
            token,
            app_name = %pending.request.app_name,
            features = pending.request.feature_list.len(),
            "generate-app: request sent"
        );

        let result = self.api.generate_app(&pending.request).await;
        if let Err(e) = &result {
            warn!(token, error = %e, code = e.error_code(), "generate-app: request failed");
        }

        let outcome = self.form.finish_generate(pending.token, result);
        log_outcome(Action::GenerateApp, token, outcome);
        outcome
    }

    /// Send the current description to `suggest-features` and replace the
    /// feature list with the suggestions.
    pub async fn suggest_features(&mut self) -> Outcome {
        let pending = self.form.begin_suggest();
        let token = pending.token.value();
        info!(
            token,
            description_len = pending.request.app_description.len(),
            "suggest-features: request sent"
        );

        let result = self.api.suggest_features(&pending.request).await;
        if let Err(e) = &result {
            warn!(token, error = %e, code = e.error_code(), "suggest-features: request failed");
        }

        let outcome = self.form.finish_suggest(pending.token, result);
        log_outcome(Action::SuggestFeatures, token, outcome);
        outcome
    }
}

fn log_outcome(action: Action, token: u64, outcome: Outcome) {
    match outcome {
        Outcome::Applied => info!(%action, token, "response applied"),
        Outcome::Stale => debug!(%action, token, "stale response discarded"),
        Outcome::Failed => {}
    }
}
