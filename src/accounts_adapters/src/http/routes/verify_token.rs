use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{AccountId, AccountStore, PasswordHasher, TokenIssuer};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::error::AccountApiError;

#[derive(Deserialize)]
pub struct VerifyTokenRequest {
    pub token: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyTokenResponse {
    pub email: String,
    pub id: AccountId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[tracing::instrument(name = "Verify token", skip_all)]
pub async fn verify_token<S, H, T>(
    State(service): State<Arc<AccountService<S, H, T>>>,
    request: Result<Json<VerifyTokenRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    let Json(request) = request?;

    let decoded = service.verify_token(request.token.expose_secret())?;

    Ok(Json(VerifyTokenResponse {
        email: decoded.claims.email,
        id: decoded.claims.id,
        issued_at: decoded.issued_at,
        expires_at: decoded.expires_at,
    }))
}
