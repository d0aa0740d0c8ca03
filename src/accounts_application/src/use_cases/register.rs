use accounts_core::{
    AccountProfile, AccountStore, AccountStoreError, AuthToken, NewAccount, PasswordHasher,
    Registration, TokenClaims, TokenIssuer,
};
use chrono::Duration;
use secrecy::Secret;

use crate::error::AccountServiceError;

/// Account profile paired with a freshly issued token.
#[derive(Debug, Clone)]
pub struct IssuedCredentials {
    pub profile: AccountProfile,
    pub token: AuthToken,
}

/// Register use case - creates an account and issues its first token
pub struct RegisterUseCase<'a, S, H, T>
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

impl<'a, S, H, T> RegisterUseCase<'a, S, H, T>
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

    /// Execute the register use case
    ///
    /// # Arguments
    /// * `email` - Raw email, must be non-empty
    /// * `name` - Raw display name, must be non-empty
    /// * `password` - Raw password, must be non-empty and at least 6 characters
    ///
    /// # Returns
    /// The new account's profile and token, or the first validation failure.
    /// A racing registration for the same email is reported as
    /// `DuplicateAccount` by the store's atomic insert.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Secret<String>,
        name: String,
        password: Secret<String>,
    ) -> Result<IssuedCredentials, AccountServiceError> {
        let registration = Registration::parse(email, name, password)?;

        match self
            .account_store
            .get_account_by_email(&registration.email)
            .await
        {
            Ok(_) => return Err(AccountServiceError::DuplicateAccount),
            Err(AccountStoreError::AccountNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let password_hash = self.password_hasher.hash(&registration.password).await?;

        let account = self
            .account_store
            .add_account(NewAccount {
                email: registration.email,
                name: registration.name,
                password_hash,
            })
            .await?;

        tracing::info!(account_id = %account.id(), "Account registered");

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
