//! # mailgate-sendgrid -- SendGrid verification provider
//!
//! Implements [`mailgate_core::VerificationProvider`] over SendGrid's
//! email-validation API:
//!
//! ```text
//! POST {base_url}/v3/validations/email
//! Authorization: Bearer <api key>
//! {"email": "<address>"}
//! ```
//!
//! The response's first result record is mapped onto a
//! [`mailgate_core::ProviderVerdict`]. Transport failures, non-2xx statuses
//! and unreadable bodies all surface as [`mailgate_core::ProviderError`].

pub mod client;
pub mod config;
pub mod wire;

pub use client::SendGridClient;
pub use config::{ConfigError, SendGridConfig};
