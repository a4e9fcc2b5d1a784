//! # Validation Policy
//!
//! Caller-configurable tolerances applied to every provider verdict.
//! Constructed once and shared read-only across validations.

use serde::{Deserialize, Serialize};

/// Errors from policy validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PolicyError {
    /// `min_score` must be a number in `[0, 1]`.
    #[error("min_score must be within [0, 1], got {0}")]
    MinScoreOutOfRange(f64),
}

/// Tolerances for risky verdicts, disposable addresses and low scores.
///
/// Every field has a default, so a partial configuration document
/// deserializes into a complete policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Accept `Risky` verdicts (still subject to the score check).
    pub allow_risky: bool,
    /// Accept addresses the provider suspects are disposable.
    pub allow_disposable: bool,
    /// Check the score on `Valid` verdicts too.
    pub always_check_score: bool,
    /// Inclusive score threshold.
    pub min_score: f64,
}

impl ValidationPolicy {
    pub const DEFAULT_MIN_SCORE: f64 = 0.30;

    pub fn with_allow_risky(mut self, allow: bool) -> Self {
        self.allow_risky = allow;
        self
    }

    pub fn with_allow_disposable(mut self, allow: bool) -> Self {
        self.allow_disposable = allow;
        self
    }

    pub fn with_always_check_score(mut self, always: bool) -> Self {
        self.always_check_score = always;
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Return the policy unchanged if `min_score` is a number in `[0, 1]`.
    pub fn validated(self) -> Result<Self, PolicyError> {
        if !(0.0..=1.0).contains(&self.min_score) {
            return Err(PolicyError::MinScoreOutOfRange(self.min_score));
        }
        Ok(self)
    }
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_risky: true,
            allow_disposable: true,
            always_check_score: false,
            min_score: Self::DEFAULT_MIN_SCORE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_permissive() {
        let p = ValidationPolicy::default();
        assert!(p.allow_risky);
        assert!(p.allow_disposable);
        assert!(!p.always_check_score);
        assert_eq!(p.min_score, 0.30);
    }

    #[test]
    fn setters_chain() {
        let p = ValidationPolicy::default()
            .with_allow_risky(false)
            .with_allow_disposable(false)
            .with_always_check_score(true)
            .with_min_score(0.5);
        assert!(!p.allow_risky);
        assert!(!p.allow_disposable);
        assert!(p.always_check_score);
        assert_eq!(p.min_score, 0.5);
    }

    #[test]
    fn validated_accepts_bounds() {
        assert!(ValidationPolicy::default().with_min_score(0.0).validated().is_ok());
        assert!(ValidationPolicy::default().with_min_score(1.0).validated().is_ok());
    }

    #[test]
    fn validated_rejects_out_of_range_and_nan() {
        let err = ValidationPolicy::default()
            .with_min_score(1.5)
            .validated()
            .unwrap_err();
        assert_eq!(err, PolicyError::MinScoreOutOfRange(1.5));
        assert!(ValidationPolicy::default().with_min_score(-0.1).validated().is_err());
        assert!(ValidationPolicy::default().with_min_score(f64::NAN).validated().is_err());
    }

    #[test]
    fn partial_document_fills_defaults() {
        let p: ValidationPolicy =
            serde_json::from_str(r#"{"allow_disposable": false, "min_score": 0.6}"#).unwrap();
        assert!(p.allow_risky);
        assert!(!p.allow_disposable);
        assert!(!p.always_check_score);
        assert_eq!(p.min_score, 0.6);
    }
}
