//! Auth Endpoints

use reqwest::Method;

use super::ApiClient;
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, User};
use crate::session::AuthBackend;

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.send(self.request(Method::POST, "auth/login").json(request)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        self.send(self.request(Method::POST, "auth/register").json(request)).await
    }
}

impl AuthBackend for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        ApiClient::login(self, request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<User, ApiError> {
        ApiClient::register(self, request).await
    }
}
