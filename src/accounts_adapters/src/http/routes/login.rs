use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{AccountStore, PasswordHasher, TokenIssuer};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::Secret;
use serde::Deserialize;

use super::error::AccountApiError;
use super::register::{CredentialsResponse, empty_secret};

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H, T>(
    State(service): State<Arc<AccountService<S, H, T>>>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    let Json(request) = request?;

    let issued = service
        .authenticate(
            request.email.unwrap_or_else(empty_secret),
            request.password.unwrap_or_else(empty_secret),
        )
        .await?;

    Ok((StatusCode::OK, Json(CredentialsResponse::from(issued))))
}
