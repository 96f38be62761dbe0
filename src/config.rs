// src/config.rs
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub rust_env: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup so tests never touch the real
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 50)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 10)?;
        if db_min_connections > db_max_connections {
            return Err(ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS",
                value: db_min_connections.to_string(),
            });
        }

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080)?,
            db_max_connections,
            db_min_connections,
            rust_env: lookup("RUST_ENV").unwrap_or_else(|| "development".to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn applies_defaults() {
        let config = AppConfig::from_lookup(lookup(maplit::hashmap! {
            "DATABASE_URL" => "postgres://localhost/portfolio",
        }))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_max_connections, 50);
        assert_eq!(config.db_min_connections, 10);
        assert_eq!(config.rust_env, "development");
        assert_eq!(config.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(maplit::hashmap! {
            "DATABASE_URL" => "postgres://db/portfolio",
            "HOST" => "0.0.0.0",
            "PORT" => "3000",
            "DB_MAX_CONNECTIONS" => "5",
            "DB_MIN_CONNECTIONS" => "1",
            "RUST_ENV" => "production",
        }))
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_min_connections, 1);
        assert_eq!(config.rust_env, "production");
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup(HashMap::new())).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn unparsable_port_is_an_error() {
        let err = AppConfig::from_lookup(lookup(maplit::hashmap! {
            "DATABASE_URL" => "postgres://localhost/portfolio",
            "PORT" => "eighty",
        }))
        .unwrap_err();

        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "PORT",
                value: "eighty".to_string()
            }
        );
    }

    #[test]
    fn min_connections_above_max_is_rejected() {
        let err = AppConfig::from_lookup(lookup(maplit::hashmap! {
            "DATABASE_URL" => "postgres://localhost/portfolio",
            "DB_MAX_CONNECTIONS" => "4",
            "DB_MIN_CONNECTIONS" => "8",
        }))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "DB_MIN_CONNECTIONS",
                ..
            }
        ));
    }
}
