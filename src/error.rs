//! Error types for configuration loading and component bootstrap.
//!
//! Component behavior itself never fails: a missing element only disables
//! the behavior that needed it. These errors cover the two places where a
//! failure is worth reporting.

use thiserror::Error;

/// Failure while parsing or validating [`crate::config::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

/// Failure while initializing one component.
#[derive(Debug, Error)]
pub enum InitError {
    /// An element the component cannot work without is absent.
    #[error("{component}: required element `{selector}` not found")]
    MissingElement { component: &'static str, selector: &'static str },
    /// A browser API call failed; the message is the stringified JS value.
    #[error("{component}: host call failed: {message}")]
    Host { component: &'static str, message: String },
}
