//! # Verdict Mapper
//!
//! Assembles a [`ValidationResult`] from the decision flags derived by the
//! engine. Pure and total.

use crate::result::ValidationResult;

/// Build the final result.
///
/// An address is valid only when disposability is tolerated or absent, the
/// risk check passed, and the score check passed. Every input flag and the
/// suggestion are copied through unchanged.
pub fn map(
    is_valid_risk: bool,
    is_valid_score: bool,
    is_disposable: bool,
    allow_disposable: bool,
    suggestion: Option<String>,
) -> ValidationResult {
    let is_valid = !(!allow_disposable && is_disposable) && is_valid_risk && is_valid_score;

    ValidationResult {
        is_valid,
        is_valid_risk,
        is_valid_score,
        is_disposable,
        has_suggestion: suggestion.is_some(),
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_passing_is_valid() {
        let r = map(true, true, false, true, None);
        assert!(r.is_valid());
        assert!(r.is_valid_risk());
        assert!(r.is_valid_score());
        assert!(!r.is_disposable());
        assert!(!r.has_suggestion());
        assert_eq!(r.suggestion(), None);
    }

    #[test]
    fn failed_risk_is_invalid() {
        let r = map(false, true, false, true, None);
        assert!(!r.is_valid());
        assert!(!r.is_valid_risk());
    }

    #[test]
    fn failed_score_is_invalid() {
        let r = map(true, false, false, true, None);
        assert!(!r.is_valid());
        assert!(!r.is_valid_score());
    }

    #[test]
    fn disposable_rejected_only_when_not_allowed() {
        assert!(!map(true, true, true, false, None).is_valid());
        assert!(map(true, true, true, true, None).is_valid());
        assert!(map(true, true, false, false, None).is_valid());
    }

    #[test]
    fn suggestion_is_copied_through() {
        let r = map(true, true, false, true, Some("jane@gmail.com".to_string()));
        assert!(r.has_suggestion());
        assert_eq!(r.suggestion(), Some("jane@gmail.com"));
    }

    #[test]
    fn is_valid_matches_formula_for_every_flag_combination() {
        for bits in 0u8..16 {
            let risk = bits & 1 != 0;
            let score = bits & 2 != 0;
            let disposable = bits & 4 != 0;
            let allow_disposable = bits & 8 != 0;
            let r = map(risk, score, disposable, allow_disposable, None);
            assert_eq!(
                r.is_valid(),
                (allow_disposable || !disposable) && risk && score,
                "flags: risk={risk} score={score} disposable={disposable} allow={allow_disposable}"
            );
            assert_eq!(r.is_disposable(), disposable);
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let r = map(true, false, true, true, Some("a@b.com".to_string()));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "isValid": false,
                "isValidRisk": true,
                "isValidScore": false,
                "isDisposable": true,
                "hasSuggestion": true,
                "suggestion": "a@b.com"
            })
        );
    }
}
