use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum JourneyError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("invalid or missing session token")]
    InvalidSession,

    #[error("not logged in")]
    NotLoggedIn,

    #[error("login failed with status {0}")]
    LoginFailed(StatusCode),

    #[error("listings query failed: {0}")]
    ListingsQuery(String),
}

impl IntoResponse for JourneyError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_body) = match self {
            JourneyError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "INVALID_CREDENTIALS".to_string(),
                    message: "Invalid email or password.".to_string(),
                },
            ),
            JourneyError::InvalidSession | JourneyError::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                ApiErrorBody {
                    code: "UNAUTHORIZED".to_string(),
                    message: "Invalid or missing session token.".to_string(),
                },
            ),
            JourneyError::Reqwest(_) | JourneyError::UrlParse(_) => (
                StatusCode::BAD_GATEWAY,
                ApiErrorBody {
                    code: "BAD_GATEWAY".to_string(),
                    message: "Upstream service is unavailable.".to_string(),
                },
            ),
            JourneyError::Database(_)
            | JourneyError::Json(_)
            | JourneyError::Io(_)
            | JourneyError::PasswordHash(_)
            | JourneyError::LoginFailed(_)
            | JourneyError::ListingsQuery(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred.".to_string(),
                },
            ),
        };
        (status, Json(ApiErrorResponse { error: error_body })).into_response()
    }
}

/// Standardized API error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}
