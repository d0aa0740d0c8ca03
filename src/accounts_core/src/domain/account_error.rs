use thiserror::Error;

/// Validation failures raised while parsing caller input into domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("email, name and password are required")]
    MissingField,
    #[error("password must be at least {0} characters long")]
    WeakPassword(usize),
    #[error("malformatted id")]
    MalformedId,
}
