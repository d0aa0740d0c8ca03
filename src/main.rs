use accounts::{
    AccountService, AccountStore, AccountsServer, Argon2PasswordHasher, HashMapAccountStore,
    JwtTokenIssuer, PostgresAccountStore, adapters::config::Settings, configure_postgresql,
};
use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    match &settings.postgres.url {
        Some(url) => {
            let pg_pool = configure_postgresql(url, &settings.postgres).await?;
            tracing::info!("Using PostgreSQL account store");
            serve(PostgresAccountStore::new(pg_pool), settings).await
        }
        None => {
            tracing::info!("No database configured, using in-memory account store");
            serve(HashMapAccountStore::new(), settings).await
        }
    }
}

async fn serve<S>(account_store: S, settings: Settings) -> Result<()>
where
    S: AccountStore + 'static,
{
    let token_issuer = JwtTokenIssuer::new(settings.auth.jwt_secret.clone())?;
    let account_service = AccountService::new(
        account_store,
        Argon2PasswordHasher::default(),
        token_issuer,
    )
    .with_token_ttl(chrono::Duration::seconds(
        settings.auth.token_ttl_in_seconds,
    ));

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;

    AccountsServer::new(account_service)
        .run_standalone(listener, Some(settings.auth.allowed_origins))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
