//! # Voice IP Minter
//!
//! A small Rust client for registering voice samples as IP assets through the
//! Crossmint IP collections API.
//!
//! ## Architecture
//!
//! 1. **Core** — Payload types and construction, result types (always available)
//! 2. **Config** — `MintConfig`, loaded once and passed to the client
//! 3. **HTTP** — `Transport` seam with a reqwest implementation
//! 4. **High-Level Client** — `MintClient` with the `ip_assets()` sub-client
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use voice_ip_minter::prelude::*;
//!
//! let client = MintClient::new(MintConfig::from_env()?)?;
//! let asset = VoiceAsset::new("Morgan Freeman", image_url, voice_url);
//!
//! match client.submit(&asset).await {
//!     result if result.reports_error() => eprintln!("{:?}", result.error_message()),
//!     result => println!("{}", result.body().unwrap()),
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules: IP asset payloads and submission results.
pub mod domain;

/// Error types.
pub mod error;

/// API URL constants.
pub mod network;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

pub mod config;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Transport trait, reqwest transport and status policy.
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `MintClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

/// Subscriber setup for the CLI.
#[cfg(feature = "cli")]
pub mod logging;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    pub use crate::config::MintConfig;
    pub use crate::domain::ip_asset::{
        IpType, MintRequest, MintResponse, MintResult, VoiceAsset,
    };
    pub use crate::error::MintError;
    pub use crate::http::{OutgoingRequest, RawResponse, StatusPolicy, Transport};
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_COLLECTION_ID};

    #[cfg(feature = "http")]
    pub use crate::client::{IpAssetsClient, MintClient, MintClientBuilder};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
}
