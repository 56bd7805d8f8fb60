//! Log subscriber setup for the command-line tool.

use std::env;

use tracing_subscriber::filter::{Directive, EnvFilter};
use tracing_subscriber::fmt::Subscriber;

use crate::error::MintError;

/// Environment variable holding an `EnvFilter` directive string.
pub const ENV_KEY: &str = "MINT_LOG";

/// Install a global fmt subscriber filtered by [`ENV_KEY`], or by `default`
/// when the variable is unset.
pub fn init_from_env_or(default: impl Into<Directive>) -> Result<(), MintError> {
    let subscriber = Subscriber::builder()
        .with_env_filter(filter_from_env_or(default))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MintError::Config(format!("Failed to set log subscriber: {e}")))
}

pub fn filter_from_env_or(default: impl Into<Directive>) -> EnvFilter {
    env::var(ENV_KEY)
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default.into()))
}
