use std::future::Future;

use tokio_util::sync::CancellationToken;

use mc_core::ports::ApiError;

/// Run `request` unless `token` fires first.
pub(crate) async fn unless_cancelled<T, F>(token: &CancellationToken, request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ApiError::Cancelled),
        result = request => result,
    }
}
