use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::api::SignupApi;
use shared::models::{
    ActivityMap, ApiError, ErrorDetail, LoginResponse, MeResponse, MessageResponse,
};

const DEFAULT_BASE_URL: &str = "";

thread_local! {
    static SHARED_CLIENT: OnceCell<SignupClient> = OnceCell::new();
}

/// HTTP client for the signup service endpoints.
#[derive(Clone, Debug)]
pub struct SignupClient {
    base_url: String,
    client: Client,
}

impl SignupClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The per-page client instance, served same-origin.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| cell.get_or_init(|| Self::new(DEFAULT_BASE_URL)).clone())
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Path for the enrollment endpoint; activity names may contain
    /// spaces and must be encoded as a path segment.
    pub(crate) fn signup_path(activity: &str) -> String {
        format!("activities/{}/signup", urlencoding::encode(activity))
    }

    /// Path for the removal endpoint.
    pub(crate) fn unregister_path(activity: &str) -> String {
        format!("activities/{}/unregister", urlencoding::encode(activity))
    }

    fn bearer(request: RequestBuilder, token: &str) -> RequestBuilder {
        request.header("Authorization", format!("Bearer {token}"))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|err| ApiError::Malformed(err.to_string()))
        } else {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .and_then(|body| body.detail);
            Err(ApiError::Rejected {
                status: status.as_u16(),
                detail,
            })
        }
    }
}

#[async_trait(?Send)]
impl SignupApi for SignupClient {
    async fn activities(&self) -> Result<ActivityMap, ApiError> {
        let response = Self::send(self.client.get(self.api_url("activities"))).await?;
        Self::read_json(response).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = self
            .client
            .post(self.api_url("auth/login"))
            .form(&[("username", username), ("password", password)]);
        let response = Self::send(request).await?;
        Self::read_json(response).await
    }

    async fn me(&self, token: &str) -> Result<MeResponse, ApiError> {
        let request = Self::bearer(self.client.get(self.api_url("auth/me")), token);
        let response = Self::send(request).await?;
        Self::read_json(response).await
    }

    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError> {
        let request = Self::bearer(
            self.client.post(self.api_url(&Self::signup_path(activity))),
            token,
        )
        .query(&[("email", email)]);
        let response = Self::send(request).await?;
        Self::read_json(response).await
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError> {
        let request = Self::bearer(
            self.client
                .delete(self.api_url(&Self::unregister_path(activity))),
            token,
        )
        .query(&[("email", email)]);
        let response = Self::send(request).await?;
        Self::read_json(response).await
    }
}
