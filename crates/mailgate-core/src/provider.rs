//! # Verification Provider Interface
//!
//! The [`VerificationProvider`] trait abstracts over the external service
//! that scores an email address. Production deployments use the HTTP client
//! in `mailgate-sendgrid`; tests and offline environments use
//! [`MockVerificationProvider`].
//!
//! Implementations must be `Send + Sync` and return `Send` futures so a
//! validator can be shared across tokio tasks behind an `Arc`.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use crate::verdict::ProviderVerdict;

/// Failure to obtain a [`ProviderVerdict`].
///
/// Surfaced unchanged by [`crate::EmailValidator::validate`]. There is no
/// retry and no fallback verdict.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The request never produced a response (connection, TLS, timeout).
    #[error("{provider} transport error: {reason}")]
    Transport { provider: String, reason: String },

    /// The provider answered with a non-2xx status.
    #[error("{provider} returned HTTP {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    /// The response body did not contain a usable verdict record.
    #[error("malformed response from {provider}: {reason}")]
    MalformedResponse { provider: String, reason: String },

    /// The provider is not configured correctly.
    #[error("provider configuration error: {0}")]
    Config(String),
}

impl ProviderError {
    /// HTTP status code, when the provider returned one.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A service that classifies an email address.
pub trait VerificationProvider: Send + Sync {
    /// Verify one address.
    fn verify(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<ProviderVerdict, ProviderError>> + Send;

    /// Human-readable name of the implementation, used in logs.
    fn provider_name(&self) -> &str;
}

/// In-memory provider returning a fixed outcome for every address.
///
/// Records each requested address so tests can assert what was sent.
#[derive(Debug)]
pub struct MockVerificationProvider {
    outcome: Result<ProviderVerdict, ProviderError>,
    requests: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl MockVerificationProvider {
    /// Provider answering every request with `verdict`.
    pub fn returning(verdict: ProviderVerdict) -> Self {
        Self::with_outcome(Ok(verdict))
    }

    /// Provider failing every request with `error`.
    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: Result<ProviderVerdict, ProviderError>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `verify` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Addresses passed to `verify`, in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl VerificationProvider for MockVerificationProvider {
    fn verify(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<ProviderVerdict, ProviderError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().push(email.to_string());
        let outcome = self.outcome.clone();
        async move { outcome }
    }

    fn provider_name(&self) -> &str {
        "MockVerificationProvider"
    }
}
