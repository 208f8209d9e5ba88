pub mod cache;
pub mod http;

pub use cache::InMemoryMemberDetailCache;
pub use http::{ApiClient, ClientBuildError, HttpAuthorizationApi, HttpMemberApi};
