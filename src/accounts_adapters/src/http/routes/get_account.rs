use std::sync::Arc;

use accounts_application::AccountService;
use accounts_core::{AccountStore, PasswordHasher, TokenIssuer};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use super::error::AccountApiError;

#[tracing::instrument(name = "Get account", skip(service))]
pub async fn get_account<S, H, T>(
    State(service): State<Arc<AccountService<S, H, T>>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AccountApiError>
where
    S: AccountStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenIssuer + 'static,
{
    let profile = service.get_by_id(&id).await?;

    Ok(Json(profile))
}
