pub mod account_service;
pub mod error;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use account_service::{AccountService, DEFAULT_TOKEN_TTL_SECONDS};
pub use error::AccountServiceError;
pub use use_cases::{
    AuthenticateUseCase, DeleteAccountUseCase, GetAccountUseCase, IssuedCredentials,
    ListAccountsUseCase, RegisterUseCase, VerifyTokenUseCase,
};
