use accounts_core::{DecodedToken, TokenIssuer};

use crate::error::AccountServiceError;

/// Verify token use case - checks signature and expiry of an issued token
pub struct VerifyTokenUseCase<'a, T>
where
    T: TokenIssuer,
{
    token_issuer: &'a T,
}

impl<'a, T> VerifyTokenUseCase<'a, T>
where
    T: TokenIssuer,
{
    pub fn new(token_issuer: &'a T) -> Self {
        Self { token_issuer }
    }

    #[tracing::instrument(name = "VerifyTokenUseCase::execute", skip_all)]
    pub fn execute(&self, token: &str) -> Result<DecodedToken, AccountServiceError> {
        self.token_issuer.verify(token).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            e.into()
        })
    }
}
