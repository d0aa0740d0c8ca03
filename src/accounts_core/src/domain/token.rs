use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use super::{account::Account, account_id::AccountId};

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    pub id: AccountId,
}

impl From<&Account> for TokenClaims {
    fn from(account: &Account) -> Self {
        Self {
            email: account.email().as_ref().expose_secret().clone(),
            id: *account.id(),
        }
    }
}

/// Claims recovered from a verified token, with its validity window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub claims: TokenClaims,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Opaque signed token string handed to the account holder.
#[derive(Debug, Clone)]
pub struct AuthToken(Secret<String>);

impl AuthToken {
    pub fn new(token: String) -> Self {
        Self(Secret::from(token))
    }
}

impl AsRef<Secret<String>> for AuthToken {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
