//! Unified error types.

use thiserror::Error;

/// Everything that can go wrong between building a mint request and holding
/// its parsed response.
///
/// [`crate::client::MintClient::submit`] never returns these directly: they are
/// folded into [`crate::domain::ip_asset::MintResult::Failure`] at the
/// submission boundary. Use `try_submit` to get the typed error.
#[derive(Error, Debug)]
pub enum MintError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Transport fault reported by a non-reqwest [`crate::http::Transport`].
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Failed to parse response: {source}, Raw response: {raw}")]
    Parse {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("Empty response from server")]
    EmptyResponse,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("A submission for this asset is already in flight")]
    InFlight,

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
