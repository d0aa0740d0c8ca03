use async_trait::async_trait;
use chrono::Duration;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    password::Password,
    password_hash::PasswordHash,
    token::{AuthToken, DecodedToken, TokenClaims},
};

#[derive(Debug, Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is unreadable: {0}")]
    MalformedHash(String),
}

/// One-way salted password derivation.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with a fresh random salt.
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError>;

    /// Check a plaintext candidate against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; errors are reserved for hashes that cannot
    /// be processed at all.
    async fn verify(
        &self,
        candidate: &Secret<String>,
        hash: &PasswordHash,
    ) -> Result<bool, HashError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Token signing secret must not be empty")]
    MissingSecret,
    #[error("Token signing failed: {0}")]
    SigningFailed(String),
}

/// Issues and verifies signed, time-bounded tokens.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, claims: &TokenClaims, ttl: Duration) -> Result<AuthToken, TokenError>;
    fn verify(&self, token: &str) -> Result<DecodedToken, TokenError>;
}
