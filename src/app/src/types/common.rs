use serde::{Deserialize, Serialize};

/// Failure of a request against the device API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// No usable envelope: the request failed in transit or the body was not valid JSON
    Transport(String),
    /// The backend answered, but with `ok: false` or an unexpected status
    Rejected { status: u16, error: Option<String> },
}

impl ApiError {
    /// Backend-provided error text, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Transport(_) => None,
            ApiError::Rejected { error, .. } => error.as_deref().filter(|e| !e.is_empty()),
        }
    }

    /// Message for inline display.
    ///
    /// Rejections show the backend error or `rejected_fallback`;
    /// transport failures always show `transport_message`.
    pub fn display_message(&self, rejected_fallback: &str, transport_message: &str) -> String {
        match self {
            ApiError::Transport(_) => transport_message.to_string(),
            ApiError::Rejected { .. } => self
                .backend_message()
                .unwrap_or(rejected_fallback)
                .to_string(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "transport error: {e}"),
            ApiError::Rejected {
                status,
                error: Some(e),
            } => write!(f, "rejected with HTTP {status}: {e}"),
            ApiError::Rejected {
                status,
                error: None,
            } => write!(f, "rejected with HTTP {status}"),
        }
    }
}
