//! Errors raised while running a check-in.

/// Failure of the login/check-in workflow.
///
/// `Auth` and `Business` display the bare server message so it can be shown
/// on the error card unchanged.
#[derive(Debug, thiserror::Error)]
pub enum CheckinError {
    /// Login response carried no usable session token
    #[error("{0}")]
    Auth(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] wreq::Error),

    /// Login response body was not valid JSON
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Request succeeded but the panel reported neither success nor a repeat check-in
    #[error("{0}")]
    Business(String),
}

pub type Result<T> = std::result::Result<T, CheckinError>;
