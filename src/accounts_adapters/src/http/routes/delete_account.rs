use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{AccountStore, PasswordHasher, TokenIssuer};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use super::error::AccountApiError;

#[tracing::instrument(name = "Delete account", skip(service))]
pub async fn delete_account<S, H, T>(
    State(service): State<Arc<AccountService<S, H, T>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    service.delete_by_id(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}
