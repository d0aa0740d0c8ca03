pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountProfile, NewAccount},
    account_error::AccountError,
    account_id::AccountId,
    account_name::AccountName,
    email::Email,
    password::Password,
    password_hash::PasswordHash,
    registration::Registration,
    token::{AuthToken, DecodedToken, TokenClaims},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{HashError, PasswordHasher, TokenError, TokenIssuer},
};
