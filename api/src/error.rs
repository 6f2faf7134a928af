//! Errors produced by requests against the MWDB API.

use serde::Deserialize;

/// A failed request against the MWDB API.
///
/// The UI treats every variant the same way (the error ends up in the
/// object view's error banner). The variants only exist so that logs can
/// tell a dropped connection from a request the server refused.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No usable response: connection refused, DNS failure, undecodable body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    /// The configured API url cannot serve as a base for endpoint urls.
    #[error("invalid API url: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status of a rejected request, if the server got to answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidUrl(_) => None,
        }
    }
}

/// The JSON body MWDB sends along with an error status.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    /// Extracts the server's message from a raw error body, if it has one.
    pub(crate) fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}
