use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:4000";

pub struct Config {
    pub database_url: String,

    /// Socket address the HTTP server binds to.
    pub listen_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_address: std::env::var("LISTEN_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDRESS.to_string()),
        })
    }
}
