use serde::{Deserialize, Serialize};

/// Successful response from `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque session token presented as a bearer credential on every
    /// subsequent mutating request.
    pub access_token: String,

    /// Display name of the authenticated teacher.
    pub teacher_name: String,
}

/// Successful response from `GET /auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeResponse {
    /// Display name of the teacher owning the presented token.
    pub name: String,
}

/// Confirmation payload returned by the signup and unregister endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable confirmation text, surfaced verbatim to the user.
    pub message: String,
}
