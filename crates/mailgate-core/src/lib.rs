//! # mailgate-core -- Email validity decisions
//!
//! Turns the verdict of an external email-verification provider into a
//! normalized [`ValidationResult`] under a caller-supplied
//! [`ValidationPolicy`].
//!
//! ## Architecture
//!
//! - [`provider`]: the [`VerificationProvider`] trait every transport
//!   implements, the [`ProviderError`] it fails with, and an in-memory
//!   [`MockVerificationProvider`].
//! - [`verdict`]: the provider's verdict record ([`ProviderVerdict`]).
//! - [`policy`]: risk, disposable-address and score tolerances.
//! - [`engine`]: [`EmailValidator`], which derives the decision flags from a
//!   verdict and the policy.
//! - [`mapper`]: the pure function assembling the final [`ValidationResult`].
//!
//! This crate performs no I/O of its own. The HTTP-backed provider lives in
//! `mailgate-sendgrid`.

pub mod engine;
pub mod mapper;
pub mod policy;
pub mod provider;
pub mod result;
pub mod verdict;

pub use engine::{evaluate, EmailValidator};
pub use policy::{PolicyError, ValidationPolicy};
pub use provider::{MockVerificationProvider, ProviderError, VerificationProvider};
pub use result::ValidationResult;
pub use verdict::{ProviderVerdict, Verdict};
