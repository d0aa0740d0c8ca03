use secrecy::Secret;

use super::{
    account_error::AccountError, account_name::AccountName, email::Email, password::Password,
};

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: Email,
    pub name: AccountName,
    pub password: Password,
}

impl Registration {
    /// Parse raw registration fields.
    ///
    /// Presence of all three fields is checked before the password strength
    /// rule, so an empty field always wins over a short password.
    pub fn parse(
        email: Secret<String>,
        name: String,
        password: Secret<String>,
    ) -> Result<Self, AccountError> {
        let email = Email::parse(email)?;
        let name = AccountName::parse(name)?;
        let password = Password::parse(password)?;

        Ok(Self {
            email,
            name,
            password,
        })
    }
}
