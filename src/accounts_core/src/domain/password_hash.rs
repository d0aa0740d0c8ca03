use secrecy::Secret;

/// Encoded output of a password hasher (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl From<Secret<String>> for PasswordHash {
    fn from(value: Secret<String>) -> Self {
        Self(value)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
