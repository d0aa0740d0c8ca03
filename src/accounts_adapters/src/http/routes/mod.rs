pub mod delete_account;
pub mod error;
pub mod get_account;
pub mod list_accounts;
pub mod login;
pub mod register;
pub mod verify_token;

pub use delete_account::delete_account;
pub use error::{AccountApiError, ErrorResponse};
pub use get_account::get_account;
pub use list_accounts::list_accounts;
pub use login::{LoginRequest, login};
pub use register::{CredentialsResponse, RegisterRequest, register};
pub use verify_token::{VerifyTokenRequest, VerifyTokenResponse, verify_token};
