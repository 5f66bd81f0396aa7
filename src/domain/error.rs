//! Error types for the attendance service boundary.

use thiserror::Error;

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Failure modes of a single fetch. All are terminal for that call; the
/// caller owns any retry policy.
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Service error: {0}")]
    Service(String),
}

impl FetchError {
    /// Translate error to Vietnamese for UI display.
    pub fn to_user_message(&self) -> String {
        match self {
            Self::Network(e) => format!("Không thể tải dữ liệu chấm công: {}", e),
            Self::MalformedResponse(_) => "Dữ liệu không đúng định dạng".to_string(),
            Self::Service(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::MalformedResponse(e.to_string())
        } else {
            FetchError::Network(e.to_string())
        }
    }
}
