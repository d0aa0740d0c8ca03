use accounts_core::{AccountError, AccountStoreError, HashError, TokenError};
use thiserror::Error;

/// Outcome tags shared by every account service operation.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    WeakPassword(String),
    #[error("user already exists")]
    DuplicateAccount,
    #[error("account not found")]
    NotFound,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("token expired")]
    TokenExpired,
    #[error("invalid token")]
    TokenInvalid,
    #[error("Store failure: {0}")]
    StoreFailure(String),
    #[error("Hash failure: {0}")]
    HashFailure(String),
    #[error("Token failure: {0}")]
    TokenFailure(String),
}

impl AccountServiceError {
    /// Whether the error was caused by the caller's input rather than by the
    /// service or its collaborators.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::WeakPassword(_)
                | Self::DuplicateAccount
                | Self::NotFound
                | Self::InvalidCredentials
                | Self::TokenExpired
                | Self::TokenInvalid
        )
    }
}

impl From<AccountError> for AccountServiceError {
    fn from(error: AccountError) -> Self {
        match error {
            AccountError::WeakPassword(_) => Self::WeakPassword(error.to_string()),
            AccountError::MissingField | AccountError::MalformedId => {
                Self::InvalidInput(error.to_string())
            }
        }
    }
}

impl From<AccountStoreError> for AccountServiceError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::DuplicateEmail => Self::DuplicateAccount,
            AccountStoreError::AccountNotFound => Self::NotFound,
            AccountStoreError::UnexpectedError(e) => Self::StoreFailure(e),
        }
    }
}

impl From<HashError> for AccountServiceError {
    fn from(error: HashError) -> Self {
        Self::HashFailure(error.to_string())
    }
}

impl From<TokenError> for AccountServiceError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => Self::TokenExpired,
            TokenError::Invalid => Self::TokenInvalid,
            TokenError::MissingSecret | TokenError::SigningFailed(_) => {
                Self::TokenFailure(error.to_string())
            }
        }
    }
}
