mod accounts_server;
mod helpers;
mod tracing;

pub use accounts_server::AccountsServer;
pub use helpers::{BootstrapError, configure_postgresql, get_postgres_pool};
