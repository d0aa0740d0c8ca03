use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use super::{
    account_id::AccountId, account_name::AccountName, email::Email, password_hash::PasswordHash,
};

/// An account as handed to the store for insertion.
///
/// The store assigns the id and the creation time.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: Email,
    pub name: AccountName,
    pub password_hash: PasswordHash,
}

/// A persisted account, including its password hash.
///
/// Not serializable; use [`AccountProfile`] for anything that
/// leaves the process.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    email: Email,
    name: AccountName,
    password_hash: PasswordHash,
    created_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        id: AccountId,
        email: Email,
        name: AccountName,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            created_at,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn name(&self) -> &AccountName {
        &self.name
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn profile(&self) -> AccountProfile {
        AccountProfile {
            id: self.id,
            email: self.email.as_ref().expose_secret().clone(),
            name: self.name.to_string(),
            created_at: self.created_at,
        }
    }
}

/// Redacted, externally visible view of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub id: AccountId,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountProfile {
    fn from(account: Account) -> Self {
        account.profile()
    }
}
