//! Remote call adapters for the app builder.
//!
//! DESIGN
//! ======
//! The two endpoints sit behind the [`BuilderApi`] trait so the view
//! controller can be exercised with in-memory fakes. [`HttpBuilderApi`] is
//! the production implementation over `reqwest`; it is configured from
//! environment variables by [`ApiConfig::from_env`].
//!
//! [`BuilderController`] owns one [`builder::FormState`] and runs each
//! adapter as begin → transport → finish, so failures surface as a recorded
//! [`builder::ActionFailure`] instead of escaping the view.

pub mod config;
pub mod controller;
pub mod http;
pub mod types;

pub use config::{ApiConfig, ApiTimeouts};
pub use controller::BuilderController;
pub use http::HttpBuilderApi;
pub use types::{ApiError, BuilderApi};
