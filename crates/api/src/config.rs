use std::net::IpAddr;
use std::str::FromStr;

use axum::http::HeaderValue;
use kinoteka_core::patch::PatchMode;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://kinoteka.db`).
    pub database_url: String,
    /// Upper bound on pooled connections (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Spaces per indentation level in JSON responses (default: `3`).
    pub json_indent: usize,
    /// How PATCH bodies are applied (default: `first-match`).
    pub patch_mode: PatchMode,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://kinoteka.db`     |
    /// | `DB_MAX_CONNECTIONS`   | `5`                        |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `JSON_INDENT`          | `3`                        |
    /// | `PATCH_MODE`           | `first-match`              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = parse_var(&lookup, "HOST", "0.0.0.0", "an IP address")?;
        let port = parse_var(&lookup, "PORT", "3000", "a valid u16")?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://kinoteka.db".into());
        let db_max_connections =
            parse_var(&lookup, "DB_MAX_CONNECTIONS", "5", "a positive integer")?;
        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "30", "a valid u64")?;
        let json_indent = parse_var(&lookup, "JSON_INDENT", "3", "a non-negative integer")?;
        let patch_mode = parse_var(
            &lookup,
            "PATCH_MODE",
            "first-match",
            "'first-match' or 'merge'",
        )?;

        let raw_origins =
            lookup("CORS_ORIGINS").unwrap_or_else(|| "http://localhost:5173".into());
        let cors_origins = raw_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ConfigError::Invalid {
                    var: "CORS_ORIGINS",
                    value: origin.to_string(),
                    expected: "a comma-separated list of origins",
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: "0".into(),
                expected: "a positive integer",
            });
        }

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            json_indent,
            patch_mode,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, "sqlite://kinoteka.db");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.json_indent, 3);
        assert_eq!(config.patch_mode, PatchMode::FirstMatch);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("CORS_ORIGINS", "http://a.test, http://b.test,"),
            ("JSON_INDENT", "0"),
            ("PATCH_MODE", "merge"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert_eq!(config.json_indent, 0);
        assert_eq!(config.patch_mode, PatchMode::Merge);
    }

    #[test]
    fn invalid_port_is_reported() {
        assert_matches!(
            load(&[("PORT", "eighty")]),
            Err(ConfigError::Invalid { var: "PORT", .. })
        );
    }

    #[test]
    fn unknown_patch_mode_is_reported() {
        assert_matches!(
            load(&[("PATCH_MODE", "overwrite")]),
            Err(ConfigError::Invalid { var: "PATCH_MODE", .. })
        );
    }

    #[test]
    fn zero_connections_rejected() {
        assert_matches!(
            load(&[("DB_MAX_CONNECTIONS", "0")]),
            Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. })
        );
    }
}
