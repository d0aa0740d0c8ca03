pub mod account;
pub mod account_error;
pub mod account_id;
pub mod account_name;
pub mod email;
pub mod password;
pub mod password_hash;
pub mod registration;
pub mod token;
