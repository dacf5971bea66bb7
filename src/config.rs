use std::collections::HashMap;
use thiserror::Error;

/// Default database filename, created in the working directory on first run.
pub const DEFAULT_DATABASE_PATH: &str = "ebookstore.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub seed_catalog: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());

        let seed_catalog = match env_map
            .get("SEED_CATALOG")
            .map(|s| s.as_str())
            .unwrap_or("on")
        {
            "on" => true,
            "off" => false,
            other => {
                return Err(ConfigError::InvalidValue(
                    "SEED_CATALOG".to_string(),
                    format!("must be on or off, got {}", other),
                ))
            }
        };

        Ok(Config {
            database_path,
            seed_catalog,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            seed_catalog: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_empty() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.database_path, DEFAULT_DATABASE_PATH);
        assert!(config.seed_catalog);
    }

    #[test]
    fn test_database_path_override() {
        let mut env_map = HashMap::new();
        env_map.insert("DATABASE_PATH".to_string(), "/tmp/shop.db".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.database_path, "/tmp/shop.db");
    }

    #[test]
    fn test_seed_catalog_off() {
        let mut env_map = HashMap::new();
        env_map.insert("SEED_CATALOG".to_string(), "off".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert!(!config.seed_catalog);
    }

    #[test]
    fn test_invalid_seed_catalog() {
        let mut env_map = HashMap::new();
        env_map.insert("SEED_CATALOG".to_string(), "maybe".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "SEED_CATALOG"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}
