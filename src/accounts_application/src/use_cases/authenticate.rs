use accounts_core::{
    AccountError, AccountStore, AccountStoreError, Email, PasswordHasher, TokenClaims,
    TokenIssuer,
};
use chrono::Duration;
use secrecy::{ExposeSecret, Secret};

use crate::error::AccountServiceError;
use crate::use_cases::register::IssuedCredentials;

/// Authenticate use case - checks credentials and issues a token
pub struct AuthenticateUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    account_store: &'a S,
    password_hasher: &'a H,
    token_issuer: &'a T,
    token_ttl: Duration,
}

impl<'a, S, H, T> AuthenticateUseCase<'a, S, H, T>
where
    S: AccountStore,
    H: PasswordHasher,
    T: TokenIssuer,
{
    pub fn new(
        account_store: &'a S,
        password_hasher: &'a H,
        token_issuer: &'a T,
        token_ttl: Duration,
    ) -> Self {
        Self {
            account_store,
            password_hasher,
            token_issuer,
            token_ttl,
        }
    }

    /// Unknown emails and wrong passwords both yield `InvalidCredentials`.
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        password: Secret<String>,
    ) -> Result<IssuedCredentials, AccountServiceError> {
        if password.expose_secret().is_empty() {
            return Err(AccountServiceError::InvalidInput(
                "email and password are required".to_owned(),
            ));
        }
        let email = Email::parse(email).map_err(|e| match e {
            AccountError::MissingField => {
                AccountServiceError::InvalidInput("email and password are required".to_owned())
            }
            other => other.into(),
        })?;

        let account = match self.account_store.get_account_by_email(&email).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => {
                return Err(AccountServiceError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        let matches = self
            .password_hasher
            .verify(&password, account.password_hash())
            .await?;
        if !matches {
            tracing::debug!(account_id = %account.id(), "Password mismatch");
            return Err(AccountServiceError::InvalidCredentials);
        }

        let token = self
            .token_issuer
            .issue(&TokenClaims::from(&account), self.token_ttl)
            .map_err(|e| AccountServiceError::TokenFailure(e.to_string()))?;

        Ok(IssuedCredentials {
            profile: account.profile(),
            token,
        })
    }
}
