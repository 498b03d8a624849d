//! Unified error handling for altnick.
//!
//! Configuration problems are the only error kind this crate raises:
//! exhaustion of the fallback list is a designed terminal outcome signaled
//! through the outbound command queue, not an error.

use thiserror::Error;

/// Errors raised while building the negotiation core from configuration.
///
/// These surface synchronously at construction and are not retryable; the
/// caller must fix the configuration and reconstruct.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config was not valid TOML or had the wrong shape (e.g., a
    /// missing `nicks` key, or `nicks` not being a list of strings).
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Every configured candidate was rejected by the nickname grammar.
    ///
    /// Individual malformed entries are silently filtered; only an empty
    /// result after filtering is fatal.
    #[error("no valid nicknames in configured list")]
    NoValidNicks,
}
