use std::collections::HashMap;
use std::sync::Arc;

use accounts_core::{Account, AccountId, AccountStore, AccountStoreError, Email, NewAccount};
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Accounts {
    by_id: HashMap<AccountId, Account>,
    by_email: HashMap<Email, AccountId>,
    // insertion order, so listings are stable
    order: Vec<AccountId>,
}

/// In-memory account store.
///
/// Both indexes sit behind one lock, so the email uniqueness check and the
/// insert happen as a single step.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<Accounts>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    #[tracing::instrument(name = "Adding account to memory store", skip_all)]
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.by_email.contains_key(&account.email) {
            return Err(AccountStoreError::DuplicateEmail);
        }

        let id = AccountId::new();
        let account = Account::new(
            id,
            account.email,
            account.name,
            account.password_hash,
            Utc::now(),
        );

        accounts.by_email.insert(account.email().clone(), id);
        accounts.by_id.insert(id, account.clone());
        accounts.order.push(id);
        Ok(account)
    }

    #[tracing::instrument(name = "Retrieving account from memory store", skip(self))]
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .by_id
            .get(id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    #[tracing::instrument(name = "Retrieving account by email from memory store", skip_all)]
    async fn get_account_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .by_email
            .get(email)
            .and_then(|id| accounts.by_id.get(id))
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    #[tracing::instrument(name = "Listing accounts in memory store", skip_all)]
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .order
            .iter()
            .filter_map(|id| accounts.by_id.get(id))
            .cloned()
            .collect())
    }

    #[tracing::instrument(name = "Deleting account from memory store", skip(self))]
    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .by_id
            .remove(id)
            .ok_or(AccountStoreError::AccountNotFound)?;
        accounts.by_email.remove(account.email());
        accounts.order.retain(|existing| existing != id);
        Ok(())
    }
}
