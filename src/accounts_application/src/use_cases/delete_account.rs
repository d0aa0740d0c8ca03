use accounts_core::{AccountId, AccountStore, AccountStoreError};

use crate::error::AccountServiceError;

/// Delete account use case - removes an account by id
pub struct DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    account_store: &'a S,
}

impl<'a, S> DeleteAccountUseCase<'a, S>
where
    S: AccountStore,
{
    pub fn new(account_store: &'a S) -> Self {
        Self { account_store }
    }

    /// Execute the delete account use case
    ///
    /// Deleting an id that does not exist succeeds without effect.
    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &str) -> Result<(), AccountServiceError> {
        let id = AccountId::parse(id)?;

        match self.account_store.delete_account(&id).await {
            Ok(()) => {
                tracing::info!(account_id = %id, "Account deleted");
                Ok(())
            }
            Err(AccountStoreError::AccountNotFound) => {
                tracing::debug!(account_id = %id, "Account already absent");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
