use accounts_core::{AccountProfile, AccountStore, DecodedToken, PasswordHasher, TokenIssuer};
use chrono::Duration;
use secrecy::Secret;

use crate::error::AccountServiceError;
use crate::use_cases::{
    AuthenticateUseCase, DeleteAccountUseCase, GetAccountUseCase, IssuedCredentials,
    ListAccountsUseCase, RegisterUseCase, VerifyTokenUseCase,
};

/// Lifetime of tokens issued when no other TTL is configured.
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Entry point for every account operation.
///
/// Owns the store, the hasher and the token issuer, and runs each request
/// through the matching use case.
pub struct AccountService<S, H, T> {
    account_store: S,
    password_hasher: H,
    token_issuer: T,
    token_ttl: Duration,
}

impl<S, H, T> AccountService<S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(account_store: S, password_hasher: H, token_issuer: T) -> Self {
        Self {
            account_store,
            password_hasher,
            token_issuer,
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECONDS),
        }
    }

    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub async fn register(
        &self,
        email: Secret<String>,
        name: String,
        password: Secret<String>,
    ) -> Result<IssuedCredentials, AccountServiceError> {
        RegisterUseCase::new(
            &self.account_store,
            &self.password_hasher,
            &self.token_issuer,
            self.token_ttl,
        )
        .execute(email, name, password)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<AccountProfile>, AccountServiceError> {
        ListAccountsUseCase::new(&self.account_store).execute().await
    }

    pub async fn get_by_id(&self, id: &str) -> Result<AccountProfile, AccountServiceError> {
        GetAccountUseCase::new(&self.account_store).execute(id).await
    }

    pub async fn delete_by_id(&self, id: &str) -> Result<(), AccountServiceError> {
        DeleteAccountUseCase::new(&self.account_store)
            .execute(id)
            .await
    }

    pub async fn authenticate(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<IssuedCredentials, AccountServiceError> {
        AuthenticateUseCase::new(
            &self.account_store,
            &self.password_hasher,
            &self.token_issuer,
            self.token_ttl,
        )
        .execute(email, password)
        .await
    }

    pub fn verify_token(&self, token: &str) -> Result<DecodedToken, AccountServiceError> {
        VerifyTokenUseCase::new(&self.token_issuer).execute(token)
    }
}
