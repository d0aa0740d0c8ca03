use accounts_application::AccountServiceError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AccountApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("account not found")]
    NotFound,

    #[error("{0}")]
    Unauthorized(String),

    #[error("internal server error")]
    Internal,
}

impl IntoResponse for AccountApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AccountApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AccountApiError::NotFound => StatusCode::NOT_FOUND,
            AccountApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AccountApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<AccountServiceError> for AccountApiError {
    fn from(error: AccountServiceError) -> Self {
        if !error.is_caller_error() {
            tracing::error!(error = %error, "Account operation failed");
            return AccountApiError::Internal;
        }

        tracing::debug!(error = %error, "Account request rejected");
        match error {
            AccountServiceError::NotFound => AccountApiError::NotFound,
            AccountServiceError::InvalidCredentials
            | AccountServiceError::TokenExpired
            | AccountServiceError::TokenInvalid => AccountApiError::Unauthorized(error.to_string()),
            _ => AccountApiError::InvalidInput(error.to_string()),
        }
    }
}

impl From<JsonRejection> for AccountApiError {
    fn from(rejection: JsonRejection) -> Self {
        AccountApiError::InvalidInput(rejection.body_text())
    }
}
