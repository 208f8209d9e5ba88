use crate::navigation::UserPermissions;

use super::ApiError;

#[async_trait::async_trait]
pub trait AuthorizationPort: Send + Sync {
    /// Permissions of the signed-in user.
    async fn fetch_user_permissions(&self) -> Result<UserPermissions, ApiError>;
}
