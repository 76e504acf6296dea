//! Backend API Wrappers
//!
//! Thin typed bindings to the reservation backend's REST endpoints,
//! organized by domain.

mod auth;
mod rooms;
mod equipment;
mod timeslots;
mod reservations;
mod admin;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;

/// HTTP client bound to one backend base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// Error body shape returned by the backend
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    /// Send and decode a JSON response body
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let response = self.execute(builder).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore any response body
    async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.execute(builder).await.map(|_| ())
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().to_string();
        log::debug!("{} {}", method, url);

        let response = self.http.execute(request).await.map_err(|e| {
            log::warn!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("{} {} returned {}", method, url, status);
        Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// `message` field of a JSON error body, if any
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/rooms"), "http://localhost:8080/api/rooms");
        assert_eq!(client.url("admin/dashboard"), "http://localhost:8080/api/admin/dashboard");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"message":"Email zaten kayıtlı","status":400}"#),
            Some("Email zaten kayıtlı".to_string())
        );
        assert_eq!(error_message(r#"{"error":"Bad Request"}"#), None);
        assert_eq!(error_message(r#"{"message":""}"#), None);
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(error_message(""), None);
    }
}
