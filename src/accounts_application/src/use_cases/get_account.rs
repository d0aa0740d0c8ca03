use accounts_core::{AccountId, AccountProfile, AccountStore};

use crate::error::AccountServiceError;

/// Get account use case - looks up a single account by id
pub struct GetAccountUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> GetAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Returns the redacted profile, or `NotFound` if no account has this id.
    #[tracing::instrument(name = "GetAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &str) -> Result<AccountProfile, AccountServiceError> {
        let id = AccountId::parse(id)?;
        let account = self.account_store.get_account(&id).await?;

        Ok(account.profile())
    }
}
