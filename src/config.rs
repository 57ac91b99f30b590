// src/config.rs
use std::env;
use thiserror::Error;

use crate::rendering::DEFAULT_FALLBACK_IMAGE;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    image_fallback: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://cms.db".into()
}

impl AppConfig {
    /// Build configuration from environment variables, with sensible
    /// defaults for optional values.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("IMAGE_FALLBACK").ok(),
        )
    }

    fn from_vars(
        database_url: Option<String>,
        image_fallback: Option<String>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url.unwrap_or_else(default_database_url);

        let image_fallback =
            image_fallback.unwrap_or_else(|| DEFAULT_FALLBACK_IMAGE.to_string());
        if !image_fallback.starts_with('/') && !image_fallback.starts_with("http") {
            return Err(ConfigError::Invalid(
                "IMAGE_FALLBACK must be an absolute path or URL".into(),
            ));
        }

        Ok(Self {
            database_url,
            image_fallback,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Placeholder substituted for non-absolute image sources at render time.
    pub fn image_fallback(&self) -> &str {
        &self.image_fallback
    }
}
