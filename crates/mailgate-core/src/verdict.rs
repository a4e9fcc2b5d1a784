//! Verdict record produced by a verification provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of an address by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Valid,
    Risky,
    Invalid,
    /// Forward-compatible catch-all for verdict strings the provider
    /// introduces after this version is deployed. Treated like `Valid`.
    #[serde(other)]
    Unknown,
}

impl Verdict {
    /// Whether this verdict forces a score check regardless of policy.
    pub fn requires_score_check(self) -> bool {
        matches!(self, Self::Risky | Self::Invalid)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid => write!(f, "Valid"),
            Self::Risky => write!(f, "Risky"),
            Self::Invalid => write!(f, "Invalid"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// One verification outcome as reported by the provider.
///
/// Consumed once by the engine and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderVerdict {
    pub verdict: Verdict,
    /// Provider confidence in `[0, 1]`.
    pub score: f64,
    pub is_suspected_disposable: bool,
    /// Local part of the address as echoed back by the provider.
    pub local_part: Option<String>,
    /// Corrected domain the provider believes was intended.
    pub suggested_domain: Option<String>,
}

impl ProviderVerdict {
    /// Verdict with a score and no disposable flag or suggestion.
    pub fn new(verdict: Verdict, score: f64) -> Self {
        Self {
            verdict,
            score,
            is_suspected_disposable: false,
            local_part: None,
            suggested_domain: None,
        }
    }

    pub fn with_disposable(mut self, disposable: bool) -> Self {
        self.is_suspected_disposable = disposable;
        self
    }

    /// Attach a suggestion: the echoed local part and the corrected domain.
    pub fn with_suggestion(mut self, local_part: impl Into<String>, domain: impl Into<String>) -> Self {
        self.local_part = Some(local_part.into());
        self.suggested_domain = Some(domain.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_deserializes_known_values() {
        let v: Verdict = serde_json::from_str("\"Risky\"").unwrap();
        assert_eq!(v, Verdict::Risky);
        let v: Verdict = serde_json::from_str("\"Invalid\"").unwrap();
        assert_eq!(v, Verdict::Invalid);
    }

    #[test]
    fn unrecognized_verdict_maps_to_unknown() {
        let v: Verdict = serde_json::from_str("\"Questionable\"").unwrap();
        assert_eq!(v, Verdict::Unknown);
    }

    #[test]
    fn only_risky_and_invalid_force_score_check() {
        assert!(Verdict::Risky.requires_score_check());
        assert!(Verdict::Invalid.requires_score_check());
        assert!(!Verdict::Valid.requires_score_check());
        assert!(!Verdict::Unknown.requires_score_check());
    }

    #[test]
    fn verdict_display() {
        assert_eq!(format!("{}", Verdict::Valid), "Valid");
        assert_eq!(format!("{}", Verdict::Unknown), "Unknown");
    }

    #[test]
    fn builder_sets_suggestion_fields() {
        let v = ProviderVerdict::new(Verdict::Valid, 0.9).with_suggestion("jane", "gmail.com");
        assert_eq!(v.local_part.as_deref(), Some("jane"));
        assert_eq!(v.suggested_domain.as_deref(), Some("gmail.com"));
        assert!(!v.is_suspected_disposable);
    }
}
