//! Form state, reference tables, and wire types for the app builder.
//!
//! This crate owns everything the presentation layer and the HTTP client
//! share: the editable form, the two static lookup tables, and the JSON
//! bodies exchanged with the `generate-app` / `suggest-features` endpoints.
//! It performs no I/O; the `adapters` crate drives the network half of each
//! adapter and hands results back through [`FormState::finish_generate`] and
//! [`FormState::finish_suggest`].

pub mod catalog;
pub mod form;
pub mod sequence;
pub mod wire;

pub use catalog::{Platform, TEMPLATES, Template, find_template, template_names};
pub use form::{Action, ActionFailure, FormState, Outcome, PendingGenerate, PendingSuggest};
pub use sequence::{RequestSequence, RequestToken};
pub use wire::{GenerateAppRequest, GenerateAppResponse, SuggestFeaturesRequest, SuggestFeaturesResponse};

/// Errors raised by form operations that reject their input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// `update_feature` was called with an index outside the current list.
    #[error("feature index {index} out of range (len {len})")]
    FeatureIndexOutOfRange { index: usize, len: usize },
    /// A platform name did not match any deployment target.
    #[error("unknown platform: {0} (expected Vercel, Netlify, or AWS)")]
    UnknownPlatform(String),
}
