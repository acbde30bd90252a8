use crate::api_client::{ApiClient, ApiRequest, RequestError};
use crate::models::auth::{SignInRequest, SignInResponse, SignUpRequest, SignUpResponse};

#[derive(Clone)]
pub struct AuthClient {
    api: ApiClient,
}

impl AuthClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// POST /auth/signin
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, RequestError> {
        self.api
            .request_as(
                ApiRequest::post("/auth/signin")
                    .json(request)
                    .fallback("Sign in failed"),
            )
            .await
    }

    /// POST /auth/signup
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SignUpResponse, RequestError> {
        self.api
            .request_as(
                ApiRequest::post("/auth/signup")
                    .json(request)
                    .fallback("Sign up failed"),
            )
            .await
    }
}
