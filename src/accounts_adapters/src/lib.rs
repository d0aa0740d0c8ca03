pub mod config;
pub mod hashing;
pub mod http;
pub mod persistence;
pub mod tokens;

pub use hashing::Argon2PasswordHasher;
pub use persistence::{HashMapAccountStore, PostgresAccountStore};
pub use tokens::JwtTokenIssuer;
