use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body shape the server uses for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorDetail {
    /// Human-readable rejection reason, when the server provides one.
    pub detail: Option<String>,
}

/// Everything that can go wrong talking to the signup service.
///
/// All three variants are handled locally by the engine and converted into
/// a user-visible message or a session transition; none of them escape to
/// the surrounding environment.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: the request produced no response at all.
    #[error("network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status, optionally carrying a
    /// human-readable reason.
    #[error("request rejected with status {status}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// The server's `detail` field, if the body carried one.
        detail: Option<String>,
    },

    /// The server answered 2xx but the body did not decode as expected.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    /// The text shown to the user for a failed mutation.
    ///
    /// Server rejections surface their own reason; transport failures and
    /// undecodable bodies fall back to the caller's phrasing, since there
    /// is nothing quotable in them.
    #[must_use]
    pub fn surface_text(&self, transport_fallback: &str) -> String {
        match self {
            Self::Rejected { detail, .. } => detail
                .clone()
                .unwrap_or_else(|| GENERIC_REJECTION.to_string()),
            Self::Network(_) | Self::Malformed(_) => transport_fallback.to_string(),
        }
    }
}

/// Fallback shown when the server rejects a request without a `detail`.
pub const GENERIC_REJECTION: &str = "An error occurred";
