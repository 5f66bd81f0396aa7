//! Environment-backed configuration.

use std::env;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("ATTENDANCE_API_URL environment variable is required")]
    MissingBaseUrl,

    #[error("ATTENDANCE_PAGE_SIZE must be a positive integer: {0}")]
    InvalidPageSize(String),
}

/// Dashboard configuration. The base URL of the attendance service is always
/// externally supplied, never hardcoded.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub token: Option<String>,
    pub page_size: u32,
}

impl Config {
    /// # Errors
    ///
    /// Returns an error when the base URL is missing or the page size is not
    /// a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("ATTENDANCE_API_URL").map_err(|_| ConfigError::MissingBaseUrl)?;

        let token = env::var("ATTENDANCE_API_TOKEN").ok().filter(|t| !t.is_empty());

        let page_size = match env::var("ATTENDANCE_PAGE_SIZE") {
            Ok(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|&size| size > 0)
                .ok_or(ConfigError::InvalidPageSize(raw))?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Config {
            base_url,
            token,
            page_size,
        })
    }
}
