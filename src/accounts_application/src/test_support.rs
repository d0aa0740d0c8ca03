//! In-process doubles for the account ports, shared by the use case tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use accounts_core::{
    Account, AccountId, AccountStore, AccountStoreError, AuthToken, DecodedToken, Email,
    HashError, NewAccount, Password, PasswordHash, PasswordHasher, TokenClaims, TokenError,
    TokenIssuer,
};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

#[derive(Default, Clone)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<Vec<Account>>>,
    failing: Arc<AtomicBool>,
}

impl MockAccountStore {
    pub fn fail_from_now_on(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    fn check(&self) -> Result<(), AccountStoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AccountStoreError::UnexpectedError(
                "store is offline".to_owned(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn add_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        self.check()?;
        let mut accounts = self.accounts.write().await;
        if accounts.iter().any(|a| a.email() == &account.email) {
            return Err(AccountStoreError::DuplicateEmail);
        }
        let account = Account::new(
            AccountId::new(),
            account.email,
            account.name,
            account.password_hash,
            Utc::now(),
        );
        accounts.push(account.clone());
        Ok(account)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        self.check()?;
        let accounts = self.accounts.read().await;
        accounts
            .iter()
            .find(|a| a.id() == id)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn get_account_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        self.check()?;
        let accounts = self.accounts.read().await;
        accounts
            .iter()
            .find(|a| a.email() == email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        self.check()?;
        Ok(self.accounts.read().await.clone())
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        self.check()?;
        let mut accounts = self.accounts.write().await;
        let before = accounts.len();
        accounts.retain(|a| a.id() != id);
        if accounts.len() == before {
            return Err(AccountStoreError::AccountNotFound);
        }
        Ok(())
    }
}

/// Reversible stand-in for a real hasher.
#[derive(Default, Clone)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError> {
        Ok(PasswordHash::new(Secret::from(format!(
            "plain${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify(
        &self,
        candidate: &Secret<String>,
        hash: &PasswordHash,
    ) -> Result<bool, HashError> {
        let stored = hash
            .as_ref()
            .expose_secret()
            .strip_prefix("plain$")
            .ok_or_else(|| HashError::MalformedHash("missing prefix".to_owned()))?;
        Ok(stored == candidate.expose_secret())
    }
}

/// Tokens of the form `stub|<exp>|<id>|<email>`.
#[derive(Default, Clone)]
pub struct StubIssuer {
    pub broken: bool,
}

impl TokenIssuer for StubIssuer {
    fn issue(&self, claims: &TokenClaims, ttl: Duration) -> Result<AuthToken, TokenError> {
        if self.broken {
            return Err(TokenError::SigningFailed("no key".to_owned()));
        }
        let exp = (Utc::now() + ttl).timestamp();
        Ok(AuthToken::new(format!(
            "stub|{exp}|{}|{}",
            claims.id, claims.email
        )))
    }

    fn verify(&self, token: &str) -> Result<DecodedToken, TokenError> {
        let mut parts = token.splitn(4, '|');
        let (Some("stub"), Some(exp), Some(id), Some(email)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(TokenError::Invalid);
        };
        let exp: i64 = exp.parse().map_err(|_| TokenError::Invalid)?;
        let expires_at = chrono::DateTime::from_timestamp(exp, 0).ok_or(TokenError::Invalid)?;
        if expires_at < Utc::now() {
            return Err(TokenError::Expired);
        }
        Ok(DecodedToken {
            claims: TokenClaims {
                email: email.to_owned(),
                id: AccountId::parse(id).map_err(|_| TokenError::Invalid)?,
            },
            issued_at: Utc::now(),
            expires_at,
        })
    }
}

pub fn secret(value: &str) -> Secret<String> {
    Secret::from(value.to_owned())
}
