use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use usuarios_core::config::{parse_or, ConfigError};

/// Connection parameters for the PostgreSQL store.
///
/// Constructed once at process start and passed to [`crate::create_pool`] /
/// [`crate::connect`]. When `url` is set it takes precedence over the
/// discrete host-style parameters.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub dbname: String,
    pub sslmode: PgSslMode,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".into(),
            port: 5432,
            user: "golang".into(),
            password: "golang".into(),
            dbname: "devbook".into(),
            sslmode: PgSslMode::Disable,
            max_connections: 10,
            acquire_timeout_secs: 5,
        }
    }
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default     |
    /// |---------------------------|-------------|
    /// | `DATABASE_URL`            | (unset)     |
    /// | `DB_HOST`                 | `localhost` |
    /// | `DB_PORT`                 | `5432`      |
    /// | `DB_USER`                 | `golang`    |
    /// | `DB_PASSWORD`             | `golang`    |
    /// | `DB_NAME`                 | `devbook`   |
    /// | `DB_SSLMODE`              | `disable`   |
    /// | `DB_MAX_CONNECTIONS`      | `10`        |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `5`         |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let sslmode = match lookup("DB_SSLMODE") {
            Some(raw) => PgSslMode::from_str(&raw)
                .map_err(|e| ConfigError::invalid("DB_SSLMODE", raw.as_str(), e))?,
            None => defaults.sslmode,
        };

        Ok(Self {
            url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            host: lookup("DB_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "DB_PORT", defaults.port)?,
            user: lookup("DB_USER").unwrap_or(defaults.user),
            password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
            dbname: lookup("DB_NAME").unwrap_or(defaults.dbname),
            sslmode,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout_secs: parse_or(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
        })
    }

    /// Translate the configuration into sqlx connect options.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
            .ssl_mode(self.sslmode))
    }
}
