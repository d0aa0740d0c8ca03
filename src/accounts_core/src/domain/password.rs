use secrecy::{ExposeSecret, Secret};

use super::account_error::AccountError;

/// Minimum number of characters a new password must contain.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// A plaintext password that passed the registration rules.
///
/// Length is counted in Unicode scalar values, not bytes.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(password: Secret<String>) -> Result<Self, AccountError> {
        let length = password.expose_secret().chars().count();
        if length == 0 {
            return Err(AccountError::MissingField);
        }
        if length < MIN_PASSWORD_LENGTH {
            return Err(AccountError::WeakPassword(MIN_PASSWORD_LENGTH));
        }
        Ok(Self(password))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
