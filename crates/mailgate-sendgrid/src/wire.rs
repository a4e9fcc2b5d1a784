//! Request and response bodies of `POST /v3/validations/email`.
//!
//! Fields use `#[serde(default)]` for resilience against schema evolution.
//! The live API returns many more fields than modeled here and
//! `deny_unknown_fields` is intentionally not used.

use mailgate_core::{ProviderVerdict, Verdict};
use serde::{Deserialize, Serialize};

/// Request body.
#[derive(Debug, Serialize)]
pub struct ValidationRequest<'a> {
    pub email: &'a str,
}

/// Response body.
///
/// The result record arrives either as the first element of an array or
/// wrapped as `{"result": {...}}`; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ValidationEnvelope {
    List(Vec<ValidationRecord>),
    Wrapped { result: ValidationRecord },
}

impl ValidationEnvelope {
    /// The first result record, if any.
    pub fn into_record(self) -> Option<ValidationRecord> {
        match self {
            Self::List(records) => records.into_iter().next(),
            Self::Wrapped { result } => Some(result),
        }
    }
}

/// One validation record.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRecord {
    pub verdict: Verdict,
    #[serde(default)]
    pub score: Option<f64>,
    /// Local part of the address, as normalized by SendGrid.
    #[serde(default)]
    pub local: Option<String>,
    /// Suggested domain correction.
    #[serde(default)]
    pub suggestion: Option<String>,
    #[serde(default)]
    pub checks: Option<Checks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Checks {
    #[serde(default)]
    pub domain: Option<DomainChecks>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainChecks {
    #[serde(default)]
    pub is_suspected_disposable_address: Option<bool>,
}

impl ValidationRecord {
    fn is_suspected_disposable(&self) -> bool {
        self.checks
            .as_ref()
            .and_then(|c| c.domain.as_ref())
            .and_then(|d| d.is_suspected_disposable_address)
            .unwrap_or(false)
    }
}

impl From<ValidationRecord> for ProviderVerdict {
    fn from(record: ValidationRecord) -> Self {
        let is_suspected_disposable = record.is_suspected_disposable();
        ProviderVerdict {
            verdict: record.verdict,
            score: record.score.unwrap_or(0.0),
            is_suspected_disposable,
            local_part: record.local,
            suggested_domain: record.suggestion,
        }
    }
}
