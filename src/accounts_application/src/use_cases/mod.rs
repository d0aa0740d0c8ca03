pub mod authenticate;
pub mod delete_account;
pub mod get_account;
pub mod list_accounts;
pub mod register;
pub mod verify_token;

pub use authenticate::AuthenticateUseCase;
pub use delete_account::DeleteAccountUseCase;
pub use get_account::GetAccountUseCase;
pub use list_accounts::ListAccountsUseCase;
pub use register::{IssuedCredentials, RegisterUseCase};
pub use verify_token::VerifyTokenUseCase;
