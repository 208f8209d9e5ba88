//! Backend REST adapters.
//!
//! Every endpoint answers `{ status, message, data, errors }`. Success
//! bodies are unwrapped to their `data` member; failures become
//! [`mc_core::ports::ApiError::Rejected`] carrying the parsed envelope.

mod authorization;
mod client;
pub mod endpoints;
mod member_api;

pub use authorization::HttpAuthorizationApi;
pub use client::{ApiClient, ClientBuildError};
pub use member_api::HttpMemberApi;
