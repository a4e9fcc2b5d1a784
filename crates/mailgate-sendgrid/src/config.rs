//! SendGrid client configuration.
//!
//! Defaults point to the production API. Override via environment variables
//! or explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Production SendGrid API root.
pub const DEFAULT_BASE_URL: &str = "https://api.sendgrid.com";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Configuration for the SendGrid validation client.
///
/// Custom `Debug` implementation redacts the `api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct SendGridConfig {
    /// API root; the validation path is appended to it, keeping any path prefix.
    pub base_url: Url,
    /// Bearer token for API authentication. Zeroed on drop.
    pub api_key: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SendGridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendGridConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SendGridConfig {
    /// Production configuration with the default timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("base_url", DEFAULT_BASE_URL)?,
            api_key: Zeroizing::new(api_key.into()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SENDGRID_API_KEY` (required)
    /// - `SENDGRID_BASE_URL` (default: `https://api.sendgrid.com`)
    /// - `SENDGRID_TIMEOUT_SECS` (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("SENDGRID_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self {
            base_url: env_url("SENDGRID_BASE_URL", DEFAULT_BASE_URL)?,
            api_key: Zeroizing::new(api_key),
            timeout_secs: std::env::var("SENDGRID_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        })
    }

    /// Configuration pointing at a local mock server (for testing).
    pub fn local_mock(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_url("local_mock", base_url)?,
            api_key: Zeroizing::new(api_key.to_string()),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    parse_url(var, &raw)
}

fn parse_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SENDGRID_API_KEY environment variable is required")]
    MissingApiKey,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

impl From<ConfigError> for mailgate_core::ProviderError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e.to_string())
    }
}

/// Serializes tests that mutate `SENDGRID_*` environment variables.
#[cfg(test)]
static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Run `f` with the given variables set (`Some`) or removed (`None`),
/// removing all of them afterwards.
#[cfg(test)]
pub(crate) fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for (name, value) in vars {
        match value {
            Some(v) => std::env::set_var(name, v),
            None => std::env::remove_var(name),
        }
    }
    let out = f();
    for (name, _) in vars {
        std::env::remove_var(name);
    }
    out
}
