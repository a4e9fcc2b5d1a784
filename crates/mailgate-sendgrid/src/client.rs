//! HTTP client for the SendGrid email-validation endpoint.
//!
//! Each `verify` call issues exactly one request. Retries are NOT built in;
//! a failure is reported to the caller as a [`ProviderError`].

use std::time::Duration;

use mailgate_core::{ProviderError, ProviderVerdict, VerificationProvider};
use reqwest::header::{HeaderValue, AUTHORIZATION};
use url::Url;

use crate::config::SendGridConfig;
use crate::wire::{ValidationEnvelope, ValidationRequest};

/// Provider name reported in errors and logs.
pub const PROVIDER_NAME: &str = "SendGrid";

/// Validation path, appended to the configured base URL.
pub const VALIDATION_PATH: &str = "v3/validations/email";

/// SendGrid-backed [`VerificationProvider`].
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SendGridClient {
    http: reqwest::Client,
    endpoint: Url,
    auth: HeaderValue,
    timeout_secs: u64,
}

impl SendGridClient {
    /// Build a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Config` if the API key contains characters
    /// not allowed in a header or the endpoint URL cannot be resolved, and
    /// `ProviderError::Transport` if the HTTP client cannot be initialized.
    pub fn new(config: SendGridConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ProviderError::Transport {
                provider: PROVIDER_NAME.into(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Self::with_http_client(http, &config)
    }

    /// Build a client around a caller-supplied `reqwest::Client`, e.g. one
    /// carrying proxy or TLS settings.
    ///
    /// The bearer token and the configured timeout are applied per request,
    /// so they hold regardless of how `http` was built.
    pub fn with_http_client(
        http: reqwest::Client,
        config: &SendGridConfig,
    ) -> Result<Self, ProviderError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key.as_str()))
            .map_err(|_| ProviderError::Config("invalid API key characters".into()))?;
        auth.set_sensitive(true);

        Ok(Self {
            http,
            endpoint: validation_endpoint(&config.base_url)?,
            auth,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Load configuration from the environment and build a client.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(SendGridConfig::from_env()?)
    }

    /// Fully resolved validation endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn request_verdict(&self, email: &str) -> Result<ProviderVerdict, ProviderError> {
        let resp = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, self.auth.clone())
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&ValidationRequest { email })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status();
        tracing::debug!(
            provider = PROVIDER_NAME,
            status = status.as_u16(),
            "validation response received"
        );

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                provider: PROVIDER_NAME.into(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = resp.bytes().await.map_err(|e| self.transport_error(e))?;

        let envelope: ValidationEnvelope =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::MalformedResponse {
                provider: PROVIDER_NAME.into(),
                reason: format!("response deserialization failed: {e}"),
            })?;

        envelope
            .into_record()
            .map(ProviderVerdict::from)
            .ok_or_else(|| ProviderError::MalformedResponse {
                provider: PROVIDER_NAME.into(),
                reason: "response contained no validation result".into(),
            })
    }

    fn transport_error(&self, e: reqwest::Error) -> ProviderError {
        let reason = if e.is_timeout() {
            format!("request timed out after {}s", self.timeout_secs)
        } else {
            e.to_string()
        };
        ProviderError::Transport {
            provider: PROVIDER_NAME.into(),
            reason,
        }
    }
}

/// Append [`VALIDATION_PATH`] to `base_url`, keeping any path prefix.
fn validation_endpoint(base_url: &Url) -> Result<Url, ProviderError> {
    let raw = format!(
        "{}/{}",
        base_url.as_str().trim_end_matches('/'),
        VALIDATION_PATH
    );
    Url::parse(&raw)
        .map_err(|e| ProviderError::Config(format!("invalid validation endpoint {raw}: {e}")))
}

impl VerificationProvider for SendGridClient {
    async fn verify(&self, email: &str) -> Result<ProviderVerdict, ProviderError> {
        self.request_verdict(email).await
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_resolves_against_base_url() {
        let client =
            SendGridClient::new(SendGridConfig::new("key").unwrap()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.sendgrid.com/v3/validations/email"
        );
    }

    #[test]
    fn endpoint_keeps_base_url_path_prefix() {
        let client = SendGridClient::new(
            SendGridConfig::local_mock("http://127.0.0.1:9000/sendgrid", "key").unwrap(),
        )
        .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:9000/sendgrid/v3/validations/email"
        );

        let client = SendGridClient::new(
            SendGridConfig::local_mock("http://127.0.0.1:9000/sendgrid/", "key").unwrap(),
        )
        .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://127.0.0.1:9000/sendgrid/v3/validations/email"
        );
    }

    #[test]
    fn with_http_client_uses_config_endpoint() {
        let config = SendGridConfig::local_mock("http://proxy.internal/sg", "key").unwrap();
        let client = SendGridClient::with_http_client(reqwest::Client::new(), &config).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "http://proxy.internal/sg/v3/validations/email"
        );
    }

    #[test]
    fn from_env_builds_client_for_configured_base_url() {
        let client = crate::config::with_env(
            &[
                ("SENDGRID_API_KEY", Some("env-key")),
                ("SENDGRID_BASE_URL", Some("https://relay.example.com/sendgrid")),
                ("SENDGRID_TIMEOUT_SECS", None),
            ],
            SendGridClient::from_env,
        )
        .unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://relay.example.com/sendgrid/v3/validations/email"
        );
    }

    #[test]
    fn from_env_without_api_key_is_config_error() {
        let err = crate::config::with_env(
            &[("SENDGRID_API_KEY", None), ("SENDGRID_BASE_URL", None)],
            SendGridClient::from_env,
        )
        .unwrap_err();
        match err {
            ProviderError::Config(msg) => assert!(msg.contains("SENDGRID_API_KEY"), "{msg}"),
            other => panic!("expected Config, got {other:?}"),
        }
    }

    #[test]
    fn rejects_api_key_with_newline() {
        let err = SendGridClient::new(SendGridConfig::new("bad\nkey").unwrap()).unwrap_err();
        assert!(matches!(err, ProviderError::Config(_)));
    }

    #[test]
    fn client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SendGridClient>();
    }
}
