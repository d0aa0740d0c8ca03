pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const APP_ENVIRONMENT_ENV_VAR: &str = "APP_ENVIRONMENT";
    pub const APP_ENV_PREFIX: &str = "APP";
    pub const APP_ENV_SEPARATOR: &str = "__";
}

pub mod defaults {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const APP_ENVIRONMENT: &str = "local";
    pub const CONFIG_DIR: &str = "config";
    pub const TOKEN_TTL_IN_SECONDS: i64 = accounts_application::DEFAULT_TOKEN_TTL_SECONDS;
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
