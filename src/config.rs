use std::env;
use std::net::SocketAddr;

use crate::error::ConfigError;

pub const DEFAULT_TABLE_NAME: &str = "demo_records";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    DynamoDb,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub store_backend: StoreBackend,
    pub table_name: String,
    pub api_token: Option<String>,
    pub docs_enabled: bool,
    pub bind_addr: SocketAddr,
    pub lambda: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_backend = match lookup("STORE_BACKEND").as_deref() {
            None | Some("memory") => StoreBackend::Memory,
            Some("dynamodb") => StoreBackend::DynamoDb,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };

        let docs_enabled = match lookup("DOCS_ENABLED").as_deref() {
            None => true,
            Some(value) => value.parse::<bool>().map_err(|_| ConfigError::Invalid {
                key: "DOCS_ENABLED",
                value: value.to_string(),
            })?,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value,
            })?,
        };

        Ok(Config {
            store_backend,
            table_name: lookup("TABLE_NAME").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            api_token: lookup("API_TOKEN").filter(|token| !token.is_empty()),
            docs_enabled,
            bind_addr,
            lambda: lookup("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_run_locally_in_memory() {
        let config = config(&[]).unwrap();
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.table_name, DEFAULT_TABLE_NAME);
        assert_eq!(config.api_token, None);
        assert!(config.docs_enabled);
        assert!(!config.lambda);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn lambda_with_dynamodb() {
        let config = config(&[
            ("STORE_BACKEND", "dynamodb"),
            ("TABLE_NAME", "records"),
            ("API_TOKEN", "s3cret"),
            ("DOCS_ENABLED", "false"),
            ("AWS_LAMBDA_RUNTIME_API", "127.0.0.1:9001"),
        ])
        .unwrap();
        assert_eq!(config.store_backend, StoreBackend::DynamoDb);
        assert_eq!(config.table_name, "records");
        assert_eq!(config.api_token.as_deref(), Some("s3cret"));
        assert!(!config.docs_enabled);
        assert!(config.lambda);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(matches!(
            config(&[("STORE_BACKEND", "postgres")]),
            Err(ConfigError::Invalid { key: "STORE_BACKEND", .. })
        ));
        assert!(config(&[("DOCS_ENABLED", "maybe")]).is_err());
        assert!(config(&[("BIND_ADDR", "localhost")]).is_err());
    }
}
