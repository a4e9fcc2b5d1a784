//! # Validation Policy Engine
//!
//! [`EmailValidator`] asks a [`VerificationProvider`] for a verdict, derives
//! the risk, score and disposable flags under its [`ValidationPolicy`], and
//! hands them to [`crate::mapper::map`].
//!
//! ## Decision rules
//!
//! | Flag | Rule |
//! |------|------|
//! | risk | `Invalid` fails, `Risky` follows `allow_risky`, anything else passes |
//! | score | checked (`score >= min_score`) for `Risky`/`Invalid`, or for every verdict when `always_check_score` is set; passes otherwise |
//! | disposable | the provider's suspicion flag, read as-is |
//!
//! The suggestion is built from the provider's echoed local part, not from
//! the address the caller passed in.

use crate::mapper;
use crate::policy::{PolicyError, ValidationPolicy};
use crate::provider::{ProviderError, VerificationProvider};
use crate::result::ValidationResult;
use crate::verdict::{ProviderVerdict, Verdict};

/// Validates addresses against a provider under a fixed policy.
///
/// Holds no mutable state, so one validator can serve concurrent callers.
#[derive(Debug)]
pub struct EmailValidator<P> {
    provider: P,
    policy: ValidationPolicy,
}

impl<P: VerificationProvider> EmailValidator<P> {
    /// Create a validator with the given policy. The policy is used as-is.
    pub fn new(provider: P, policy: ValidationPolicy) -> Self {
        Self { provider, policy }
    }

    /// Create a validator, rejecting a policy whose `min_score` is out of range.
    pub fn try_new(provider: P, policy: ValidationPolicy) -> Result<Self, PolicyError> {
        Ok(Self::new(provider, policy.validated()?))
    }

    /// Create a validator with [`ValidationPolicy::default`].
    pub fn with_defaults(provider: P) -> Self {
        Self::new(provider, ValidationPolicy::default())
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Verify `email` with the provider and apply the policy.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`ProviderError`] unchanged if it cannot
    /// produce a verdict.
    pub async fn validate(&self, email: &str) -> Result<ValidationResult, ProviderError> {
        let verdict = match self.provider.verify(email).await {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    code = e.code(),
                    "email verification failed: {e}"
                );
                return Err(e);
            }
        };

        let result = evaluate(&self.policy, &verdict);

        tracing::debug!(
            provider = self.provider.provider_name(),
            verdict = %verdict.verdict,
            score = verdict.score,
            is_valid = result.is_valid(),
            is_valid_risk = result.is_valid_risk(),
            is_valid_score = result.is_valid_score(),
            is_disposable = result.is_disposable(),
            "email verdict evaluated"
        );

        Ok(result)
    }
}

/// Apply `policy` to an already obtained verdict.
pub fn evaluate(policy: &ValidationPolicy, verdict: &ProviderVerdict) -> ValidationResult {
    mapper::map(
        is_valid_risk(policy, verdict.verdict),
        is_valid_score(policy, verdict),
        verdict.is_suspected_disposable,
        policy.allow_disposable,
        suggestion(verdict),
    )
}

fn is_valid_risk(policy: &ValidationPolicy, verdict: Verdict) -> bool {
    match verdict {
        Verdict::Invalid => false,
        Verdict::Risky => policy.allow_risky,
        Verdict::Valid | Verdict::Unknown => true,
    }
}

fn is_valid_score(policy: &ValidationPolicy, verdict: &ProviderVerdict) -> bool {
    if policy.always_check_score || verdict.verdict.requires_score_check() {
        return verdict.score >= policy.min_score;
    }
    true
}

fn suggestion(verdict: &ProviderVerdict) -> Option<String> {
    verdict.suggested_domain.as_ref().map(|domain| {
        format!(
            "{}@{}",
            verdict.local_part.as_deref().unwrap_or_default(),
            domain
        )
    })
}
