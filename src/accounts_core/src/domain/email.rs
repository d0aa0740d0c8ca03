use std::hash::{Hash, Hasher};

use secrecy::{ExposeSecret, Secret};

use super::account_error::AccountError;

/// Account email address.
///
/// Only emptiness is checked; the value is otherwise kept exactly as given,
/// and two emails are equal only if they match byte for byte.
#[derive(Debug, Clone)]
pub struct Email(Secret<String>);

impl Email {
    pub fn parse(email: Secret<String>) -> Result<Self, AccountError> {
        if email.expose_secret().is_empty() {
            return Err(AccountError::MissingField);
        }
        Ok(Self(email))
    }
}

impl TryFrom<Secret<String>> for Email {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl AsRef<Secret<String>> for Email {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Email {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}

impl Eq for Email {}

impl Hash for Email {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.expose_secret().hash(state);
    }
}
