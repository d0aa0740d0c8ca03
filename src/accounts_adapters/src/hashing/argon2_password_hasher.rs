use accounts_core::{HashError, Password, PasswordHash, PasswordHasher};
use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

/// Argon2id memory cost in KiB.
pub const DEFAULT_MEMORY_COST: u32 = 15000;
/// Argon2id iteration count.
pub const DEFAULT_TIME_COST: u32 = 2;
/// Argon2id lanes.
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id hasher producing PHC strings with a fresh salt per hash.
///
/// The work runs on tokio's blocking pool.
#[derive(Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Result<Self, HashError> {
        let params = Params::new(memory_cost, time_cost, parallelism, None)
            .map_err(|e| HashError::HashingFailed(e.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self {
            params: Params::new(
                DEFAULT_MEMORY_COST,
                DEFAULT_TIME_COST,
                DEFAULT_PARALLELISM,
                None,
            )
            .unwrap_or_default(),
        }
    }
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let hasher = self.argon2();
        let password = password.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt: SaltString = SaltString::generate(rand_core::OsRng);
                hasher
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| HashError::HashingFailed(e.to_string()))
            })
        })
        .await
        .map_err(|e| HashError::HashingFailed(e.to_string()))?;

        result
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Secret<String>,
        hash: &PasswordHash,
    ) -> Result<bool, HashError> {
        let current_span: tracing::Span = tracing::Span::current();
        let verifier = self.argon2();
        let candidate = candidate.clone();
        let expected = hash.clone();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = password_hash::PasswordHash::new(
                    expected.as_ref().expose_secret(),
                )
                .map_err(|e| HashError::MalformedHash(e.to_string()))?;

                match verifier.verify_password(candidate.expose_secret().as_bytes(), &expected) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(HashError::HashingFailed(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| HashError::HashingFailed(e.to_string()))?;

        result
    }
}
