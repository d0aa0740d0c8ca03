use std::sync::Arc;

use accounts_application::{AccountService, IssuedCredentials};
use accounts_core::{AccountId, AccountStore, PasswordHasher, TokenIssuer};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::error::AccountApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub email: Option<Secret<String>>,
    pub name: Option<String>,
    pub password: Option<Secret<String>>,
}

/// Account fields plus the issued token, as returned by register and login.
#[derive(Debug, Serialize, Deserialize)]
pub struct CredentialsResponse {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub token: String,
}

impl From<IssuedCredentials> for CredentialsResponse {
    fn from(issued: IssuedCredentials) -> Self {
        Self {
            id: issued.profile.id,
            email: issued.profile.email,
            name: issued.profile.name,
            token: issued.token.as_ref().expose_secret().clone(),
        }
    }
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register<S, H, T>(
    State(service): State<Arc<AccountService<S, H, T>>>,
    request: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    let Json(request) = request?;

    let issued = service
        .register(
            request.email.unwrap_or_else(empty_secret),
            request.name.unwrap_or_default(),
            request.password.unwrap_or_else(empty_secret),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(CredentialsResponse::from(issued))))
}

pub(crate) fn empty_secret() -> Secret<String> {
    Secret::from(String::new())
}
