use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{AccountStore, PasswordHasher, TokenIssuer};
use axum::{Json, extract::State, response::IntoResponse};

use super::error::AccountApiError;

#[tracing::instrument(name = "List accounts", skip_all)]
pub async fn list_accounts<S, H, T>(
    State(service): State<Arc<AccountService<S, H, T>>>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    let profiles = service.get_all().await?;

    Ok(Json(profiles))
}
