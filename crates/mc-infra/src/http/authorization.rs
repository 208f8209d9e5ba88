use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use mc_core::navigation::UserPermissions;
use mc_core::ports::{ApiError, AuthorizationPort};

use super::client::ApiClient;
use super::endpoints;

#[derive(Debug, Deserialize)]
struct PermissionEntry {
    permission_name: String,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    #[serde(default)]
    username: String,
    #[serde(default)]
    is_admin: bool,
    #[serde(default)]
    permissions: Vec<PermissionEntry>,
}

pub struct HttpAuthorizationApi {
    client: ApiClient,
}

impl HttpAuthorizationApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthorizationPort for HttpAuthorizationApi {
    async fn fetch_user_permissions(&self) -> Result<UserPermissions, ApiError> {
        let data = self.client.get(endpoints::USER_PERMISSIONS).await?;
        parse_user_permissions(data)
    }
}

/// `data` is a list holding the signed-in user; an empty list means no
/// permissions at all.
fn parse_user_permissions(data: Value) -> Result<UserPermissions, ApiError> {
    let users: Vec<UserEntry> =
        serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(users
        .into_iter()
        .next()
        .map(|user| UserPermissions {
            username: user.username,
            is_admin: user.is_admin,
            permissions: user
                .permissions
                .into_iter()
                .map(|p| p.permission_name)
                .collect(),
        })
        .unwrap_or_default())
}
