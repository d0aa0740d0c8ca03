use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    account::{Account, NewAccount},
    account_id::AccountId,
    email::Email,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account with this email already exists")]
    DuplicateEmail,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::DuplicateEmail, Self::DuplicateEmail)
                | (Self::AccountNotFound, Self::AccountNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Durable keyed collection of accounts.
///
/// Implementations must make `add_account` atomic with respect to the email
/// uniqueness check: when two inserts race on the same email, exactly one
/// succeeds and the other fails with [`AccountStoreError::DuplicateEmail`].
#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError>;
    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountStoreError>;
    async fn get_account_by_email(&self, email: &Email) -> Result<Account, AccountStoreError>;
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError>;
    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountStoreError>;
}
