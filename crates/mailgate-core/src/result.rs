//! Normalized validation outcome returned to callers.

use serde::Serialize;

/// Outcome of one validation call.
///
/// Built once by [`crate::mapper::map`] and never mutated afterwards.
/// `has_suggestion` always agrees with `suggestion.is_some()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub(crate) is_valid: bool,
    pub(crate) is_valid_risk: bool,
    pub(crate) is_valid_score: bool,
    pub(crate) is_disposable: bool,
    pub(crate) has_suggestion: bool,
    pub(crate) suggestion: Option<String>,
}

impl ValidationResult {
    /// Overall decision.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The verdict passed the risk tolerance.
    pub fn is_valid_risk(&self) -> bool {
        self.is_valid_risk
    }

    /// The score passed the threshold, or was not checked.
    pub fn is_valid_score(&self) -> bool {
        self.is_valid_score
    }

    /// The provider suspects a disposable mailbox.
    pub fn is_disposable(&self) -> bool {
        self.is_disposable
    }

    pub fn has_suggestion(&self) -> bool {
        self.has_suggestion
    }

    /// Full corrected address, if the provider offered one.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }
}
