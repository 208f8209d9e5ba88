use thiserror::Error;

use crate::errors::ErrorEnvelope;

/// Failure talking to the backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status and (maybe) an envelope.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, envelope: ErrorEnvelope },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected response: {0}")]
    Decode(String),

    /// The owning wizard instance went away before the response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Envelope to map onto the form; transport-level failures get an
    /// envelope carrying only a generic detail.
    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::Rejected { envelope, .. } => envelope.clone(),
            ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Cancelled => {
                ErrorEnvelope::default()
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}
