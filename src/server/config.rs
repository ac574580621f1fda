use crate::server::error::config::ConfigError;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    /// HMAC secret for signing admin bearer tokens.
    pub jwt_secret: String,
    /// Number of mobile technicians; bounds how many appointments may
    /// overlap before a slot counts as full.
    pub tech_count: usize,
    /// Concurrent background jobs processed by the worker pool.
    pub workers: usize,
}

impl Config {
    /// Defaults pointing at local development services. Used by test setups;
    /// production always goes through [`Config::from_env`].
    pub fn local_defaults() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            valkey_url: "redis://localhost:6379".to_string(),
            jwt_secret: "curbside-test-secret".to_string(),
            tech_count: 1,
            workers: 4,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            tech_count: parse_or("TECH_COUNT", 1)?,
            workers: parse_or("WORKERS", 4)?,
        })
    }
}

fn require(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}

fn parse_or(var: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a positive integer, got {:?}", value),
        }),
        Err(_) => Ok(default),
    }
}
