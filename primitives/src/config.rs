use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use toml::de::Error as TomlError;

pub static PRODUCTION_CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::try_toml(include_str!("../../docs/config/prod.toml"))
        .expect("Failed to parse prod.toml config file")
});

pub static DEVELOPMENT_CONFIG: Lazy<Config> = Lazy::new(|| {
    Config::try_toml(include_str!("../../docs/config/dev.toml"))
        .expect("Failed to parse dev.toml config file")
});

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
/// The environment in which the application is running
/// Defaults to [`Environment::Development`]
pub enum Environment {
    /// The default development setup is running MongoDB locally.
    Development,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Self::Development
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Upper bound for every call made to the store.
    /// In milliseconds
    pub query_timeout: u32,
    pub mongodb: MongoConfig,
}

/// Where the Ads are persisted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Config {
    /// Utility method that will deserialize a Toml file content into a [`Config`].
    pub fn try_toml(toml: &str) -> Result<Self, TomlError> {
        toml::from_str(toml)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout.into())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Toml parsing: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("File reading: {0}")]
    InvalidFile(#[from] std::io::Error),
}

/// If no `config_file` path is provided it will load the [`Environment`] configuration.
/// If `config_file` path is provided it will try to read and parse the file in Toml format.
pub fn configuration(
    environment: Environment,
    config_file: Option<&str>,
) -> Result<Config, ConfigError> {
    match config_file {
        Some(config_file) => {
            let content = std::fs::read_to_string(config_file)?;

            Ok(Config::try_toml(&content)?)
        }
        None => match environment {
            Environment::Production => Ok(PRODUCTION_CONFIG.clone()),
            Environment::Development => Ok(DEVELOPMENT_CONFIG.clone()),
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bundled_configs_are_valid() {
        let development = configuration(Environment::Development, None).expect("Should load");
        assert_eq!("mongodb://127.0.0.1:27017", development.mongodb.uri);
        assert_eq!(Duration::from_secs(5), development.query_timeout());

        let production = configuration(Environment::Production, None).expect("Should load");
        assert_eq!("ads", production.mongodb.collection);
    }

    #[test]
    fn parses_mongodb_table() {
        let toml = r#"
            query_timeout = 250

            [mongodb]
            uri = "mongodb://localhost:27018"
            database = "dcard"
            collection = "ad"
        "#;

        let config = Config::try_toml(toml).expect("Should parse");

        let expected = Config {
            query_timeout: 250,
            mongodb: MongoConfig {
                uri: "mongodb://localhost:27018".into(),
                database: "dcard".into(),
                collection: "ad".into(),
            },
        };
        assert_eq!(expected, config);
    }

    #[test]
    fn missing_mongodb_table_is_an_error() {
        assert!(Config::try_toml("query_timeout = 250").is_err());
    }

    #[test]
    fn unreadable_file_is_a_config_error() {
        let error = configuration(Environment::Development, Some("./does-not-exist.toml"))
            .expect_err("Should fail to read the file");

        assert!(matches!(error, ConfigError::InvalidFile(_)));
    }
}
