use std::time::Duration;

use crate::error::FeedbinError;

/// Feedbin API v2 base address.
pub const BASE_URL: &str = "https://api.feedbin.com/v2";

/// Fixed timeout applied to every upstream call. There is no per-call
/// override.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and endpoint for a Feedbin account.
///
/// Built once at process start and handed to the client; operations never
/// read the environment themselves.
#[derive(Debug, Clone)]
pub struct FeedbinConfig {
    pub email: String,
    pub password: String,
    pub base_url: String,
}

impl FeedbinConfig {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Read credentials from the FEEDBIN_EMAIL and FEEDBIN_PASSWORD
    /// environment variables.
    pub fn from_env() -> Result<Self, FeedbinError> {
        let email = require_var("FEEDBIN_EMAIL")?;
        let password = require_var("FEEDBIN_PASSWORD")?;
        Ok(Self::new(email, password))
    }

    /// Replace the base address. Tests use this to point the client at a
    /// local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn require_var(name: &str) -> Result<String, FeedbinError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(FeedbinError::Config(format!(
            "{} environment variable not set",
            name
        ))),
    }
}
