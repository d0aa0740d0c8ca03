//! Axum handlers for the account endpoints.
//!
//! Every handler takes the shared [`AccountService`](accounts_application::AccountService)
//! as state and performs the single mapping from service outcomes to HTTP
//! status codes through [`routes::AccountApiError`].

pub mod routes;
