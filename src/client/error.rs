//! Client-side error type.

use thiserror::Error;

/// Errors seen by a driver talking to an oracle.
///
/// `ConnectionFailed` (no response at all) and `Rejected` (an explicit error
/// response) are deliberately separate outcomes.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request rejected with status {status} ({kind}): {message}")]
    Rejected {
        status: u16,
        kind: String,
        message: String,
    },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Oracle not ready: {0}")]
    NotReady(String),

    #[error("Failed to spawn oracle: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
