use accounts_core::{AccountProfile, AccountStore};

use crate::error::AccountServiceError;

/// List accounts use case - returns every account in store order
pub struct ListAccountsUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> ListAccountsUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    #[tracing::instrument(name = "ListAccountsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<AccountProfile>, AccountServiceError> {
        let accounts = self.account_store.list_accounts().await?;

        Ok(accounts.iter().map(|account| account.profile()).collect())
    }
}
