//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. The backend REST API, the member
//! detail cache and the notification surface are all reached through here.

mod authorization;
mod errors;
mod member_api;
mod member_detail_cache;
mod notifier;

pub use authorization::AuthorizationPort;
pub use errors::ApiError;
pub use member_api::{MemberApiPort, NextMemberIdRequest, WriteMode};
pub use member_detail_cache::MemberDetailCachePort;
pub use notifier::NotificationPort;
