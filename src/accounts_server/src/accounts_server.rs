use std::sync::Arc;

use accounts_adapters::{
    config::AllowedOrigins,
    http::routes::{delete_account, get_account, list_accounts, login, register, verify_token},
};
use accounts_application::AccountService;
use accounts_core::{AccountStore, PasswordHasher, TokenIssuer};
use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the account service
pub struct AccountsServer {
    router: Router,
}

impl AccountsServer {
    /// Create the server around a fully wired account service
    ///
    /// # Routes
    /// * `GET /users`, `POST /users`
    /// * `GET /users/{id}`, `DELETE /users/{id}`
    /// * `POST /login`, `POST /verify-token`
    pub fn new<S, H, T>(account_service: AccountService<S, H, T>) -> Self
    where
        S: AccountStore + 'static,
        H: PasswordHasher + 'static,
        T: TokenIssuer + 'static,
    {
        let account_service = Arc::new(account_service);

        let router = Router::new()
            .route(
                "/users",
                get(list_accounts::<S, H, T>).post(register::<S, H, T>),
            )
            .route(
                "/users/{id}",
                get(get_account::<S, H, T>).delete(delete_account::<S, H, T>),
            )
            .route("/login", post(login::<S, H, T>))
            .route("/verify-token", post(verify_token::<S, H, T>))
            .with_state(account_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the server into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - Optional list of allowed CORS origins
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        if let Some(allowed_origins) = allowed_origins.filter(|origins| !origins.is_empty()) {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server until ctrl-c
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Accounts service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
