use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: Option<String>, // Optional; local setups often run without one
    pub db_name: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            db_host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
            db_password: std::env::var("DB_PASSWORD")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "leads".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Database host: {}", config.db_host);
        tracing::debug!("Database user: {}", config.db_user);
        tracing::debug!("Database name: {}", config.db_name);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }

    /// Connection options for the configured database.
    ///
    /// The server port stays at the driver default; only host, user,
    /// password and database name are part of the configured surface.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.db_host)
            .username(&self.db_user)
            .database(&self.db_name);

        if let Some(ref password) = self.db_password {
            options = options.password(password);
        }

        options
    }
}
