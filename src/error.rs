//! Client Errors
//!
//! Backend failures, client-side validation failures, and the policy for
//! turning either into a user-facing message.

use thiserror::Error;

/// Failure of a backend call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("backend returned {status}{}", .message.as_deref().map(|m| format!(": {}", m)).unwrap_or_default())]
    Status { status: u16, message: Option<String> },

    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend `message` field if present, otherwise the given fallback
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Input rejected before any request is issued
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Lütfen tarih ve zaman dilimi seçiniz!")]
    MissingDateOrTimeSlot,

    #[error("Lütfen bir kaynak seçiniz!")]
    MissingResource,

    #[error("Kullanıcı bilgisi bulunamadı!")]
    NotLoggedIn,

    #[error("Tüm alanları doldurun")]
    MissingFields,

    #[error("SQL sorgusu boş olamaz!")]
    EmptyQuery,

    #[error("Yalnızca tek bir okuma sorgusu çalıştırılabilir (SELECT, WITH, EXPLAIN, SHOW)")]
    StatementNotAllowed,
}

/// Either kind of failure, for operations that validate and then call the backend
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ClientError {
    /// Validation errors carry their own message; backend errors follow `ApiError::user_message`
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ClientError::Validation(e) => e.to_string(),
            ClientError::Api(e) => e.user_message(fallback),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_wins_over_fallback() {
        let err = ApiError::Status { status: 409, message: Some("Bu oda zaten rezerve".to_string()) };
        assert_eq!(err.user_message("Rezervasyon oluşturulamadı!"), "Bu oda zaten rezerve");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_fallback_when_message_missing_or_blank() {
        let missing = ApiError::Status { status: 500, message: None };
        let blank = ApiError::Status { status: 500, message: Some("  ".to_string()) };
        let network = ApiError::Network("connection refused".to_string());
        for err in [missing, blank, network] {
            assert_eq!(err.user_message("Bir hata oluştu"), "Bir hata oluştu");
        }
    }

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { status: 404, message: Some("not found".to_string()) };
        assert_eq!(err.to_string(), "backend returned 404: not found");
        let err = ApiError::Status { status: 502, message: None };
        assert_eq!(err.to_string(), "backend returned 502");
    }

    #[test]
    fn test_validation_error_message_is_shown_verbatim() {
        let err = ClientError::from(ValidationError::MissingDateOrTimeSlot);
        assert_eq!(err.user_message("ignored"), "Lütfen tarih ve zaman dilimi seçiniz!");
    }
}
