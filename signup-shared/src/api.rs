//! Transport seam between the engine and the signup service.

use async_trait::async_trait;

use crate::models::{ActivityMap, ApiError, LoginResponse, MeResponse, MessageResponse};

/// The five server endpoints the client consumes.
///
/// The trait is object safe and `?Send` because the client runs on the
/// browser's single-threaded event loop; tests substitute a scripted
/// implementation to control response contents and completion order.
#[async_trait(?Send)]
pub trait SignupApi {
    /// `GET /activities` – the full activity collection.
    async fn activities(&self) -> Result<ActivityMap, ApiError>;

    /// `POST /auth/login` with form-encoded credentials.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `GET /auth/me` with the token as a bearer credential.
    async fn me(&self, token: &str) -> Result<MeResponse, ApiError>;

    /// `POST /activities/{name}/signup?email=…` with a bearer credential.
    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError>;

    /// `DELETE /activities/{name}/unregister?email=…` with a bearer
    /// credential.
    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError>;
}
