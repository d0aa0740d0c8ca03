//! # Accounts - User Account Service Library
//!
//! Facade crate re-exporting the public APIs of the account service
//! components so callers can depend on a single crate.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `AccountProfile`, etc.
//! - **Ports**: `AccountStore`, `PasswordHasher`, `TokenIssuer`
//! - **Use cases**: `RegisterUseCase`, `AuthenticateUseCase`, etc.
//! - **Adapters**: `HashMapAccountStore`, `PostgresAccountStore`, `Argon2PasswordHasher`, `JwtTokenIssuer`
//! - **Server**: `AccountsServer` hosts the HTTP API

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use accounts_core::*;
}

pub use accounts_core::{
    Account, AccountError, AccountId, AccountName, AccountProfile, AuthToken, DecodedToken,
    Email, NewAccount, Password, PasswordHash, Registration, TokenClaims,
};

// ============================================================================
// Ports
// ============================================================================

/// Store and service trait definitions
pub mod ports {
    pub use accounts_core::{
        AccountStore, AccountStoreError, HashError, PasswordHasher, TokenError, TokenIssuer,
    };
}

pub use ports::*;

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use accounts_application::use_cases::*;
}

pub use accounts_application::{
    AccountService, AccountServiceError, AuthenticateUseCase, DEFAULT_TOKEN_TTL_SECONDS,
    DeleteAccountUseCase, GetAccountUseCase, IssuedCredentials, ListAccountsUseCase,
    RegisterUseCase, VerifyTokenUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use accounts_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use accounts_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use accounts_adapters::hashing::*;
    }

    /// Token signing and verification
    pub mod tokens {
        pub use accounts_adapters::tokens::*;
    }

    /// Configuration
    pub mod config {
        pub use accounts_adapters::config::*;
    }
}

pub use accounts_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtTokenIssuer, PostgresAccountStore,
};

// ============================================================================
// Server (Main Entry Point)
// ============================================================================

pub use accounts_server::{
    AccountsServer, BootstrapError, configure_postgresql, get_postgres_pool,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the store and hasher ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

/// Re-export axum so hosts can mount [`AccountsServer::as_nested_router`]
pub use axum;
