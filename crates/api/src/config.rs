use std::net::IpAddr;

use axum::http::HeaderValue;
use usuarios_core::config::{parse_or, ConfigError};

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Invalid origins fail here rather than when the CORS layer is built.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = parse_or(&lookup, "HOST", IpAddr::from([0, 0, 0, 0]))?;
        let port = parse_or(&lookup, "PORT", 3000u16)?;

        let cors_origins = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|e| ConfigError::invalid("CORS_ORIGINS", origin, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();

        assert_eq!(config.host, IpAddr::from([0, 0, 0, 0]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = ServerConfig::from_lookup(|key| match key {
            "CORS_ORIGINS" => Some("https://a.example, https://b.example,,".into()),
            _ => None,
        })
        .unwrap();

        assert_eq!(
            config.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn invalid_host_is_rejected() {
        let err = ServerConfig::from_lookup(|key| match key {
            "HOST" => Some("not-an-ip".into()),
            _ => None,
        })
        .unwrap_err();

        assert_matches!(err, ConfigError::Invalid { key: "HOST", .. });
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let err = ServerConfig::from_lookup(|key| match key {
            "CORS_ORIGINS" => Some("http://ok.example,bad\norigin".into()),
            _ => None,
        })
        .unwrap_err();

        assert_matches!(err, ConfigError::Invalid { key: "CORS_ORIGINS", .. });
    }
}
