//! High-level client — `MintClient` with its builder and sub-client accessor.
//!
//! The asset sub-client lives in `domain/ip_asset/client.rs`. This module
//! keeps the builder, the shared configuration and the in-flight guard.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::config::MintConfig;
use crate::domain::ip_asset::client::IpAssets;
use crate::domain::ip_asset::{MintResult, VoiceAsset};
use crate::error::MintError;
use crate::http::{ReqwestTransport, StatusPolicy, Transport};
use crate::network::collection_assets_url;

// Re-export the sub-client type for convenience.
pub use crate::domain::ip_asset::client::IpAssets as IpAssetsClient;

/// The primary entry point.
///
/// Clones share the transport, configuration and in-flight set.
pub struct MintClient<T = ReqwestTransport> {
    pub(crate) transport: Arc<T>,
    pub(crate) config: Arc<MintConfig>,
    pub(crate) in_flight: InFlight,
}

impl MintClient<ReqwestTransport> {
    pub fn builder() -> MintClientBuilder {
        MintClientBuilder::default()
    }

    /// Client over reqwest for an already loaded configuration.
    pub fn new(config: MintConfig) -> Result<Self, MintError> {
        MintClientBuilder::default().config(config).build()
    }
}

impl<T: Transport> MintClient<T> {
    pub fn ip_assets(&self) -> IpAssets<'_, T> {
        IpAssets { client: self }
    }

    /// Shorthand for `client.ip_assets().submit(asset)`.
    pub async fn submit(&self, asset: &VoiceAsset) -> MintResult {
        self.ip_assets().submit(asset).await
    }

    pub fn config(&self) -> &MintConfig {
        &self.config
    }

    /// Endpoint that new assets are posted to.
    pub fn collection_url(&self) -> String {
        collection_assets_url(&self.config.base_url, &self.config.collection_id)
    }
}

impl<T> Clone for MintClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            config: self.config.clone(),
            in_flight: self.in_flight.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// In-flight guard
// ═════════════════════════════════════════════════════════════════════════════

/// Assets with a submission outstanding.
#[derive(Clone, Default)]
pub(crate) struct InFlight {
    assets: Arc<Mutex<HashSet<VoiceAsset>>>,
}

impl InFlight {
    /// Claim `asset` until the returned guard drops.
    pub(crate) fn acquire(&self, asset: &VoiceAsset) -> Result<InFlightGuard, MintError> {
        let mut assets = self.assets.lock().unwrap_or_else(PoisonError::into_inner);
        if !assets.insert(asset.clone()) {
            return Err(MintError::InFlight);
        }
        Ok(InFlightGuard {
            assets: self.assets.clone(),
            asset: asset.clone(),
        })
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

pub(crate) struct InFlightGuard {
    assets: Arc<Mutex<HashSet<VoiceAsset>>>,
    asset: VoiceAsset,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.assets
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.asset);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct MintClientBuilder {
    config: MintConfig,
}

impl MintClientBuilder {
    /// Replace every setting with `config`.
    pub fn config(mut self, config: MintConfig) -> Self {
        self.config = config;
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.config.api_key = key.to_string();
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn collection_id(mut self, id: &str) -> Self {
        self.config.collection_id = id.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    pub fn status_policy(mut self, policy: StatusPolicy) -> Self {
        self.config.status_policy = policy;
        self
    }

    pub fn build(self) -> Result<MintClient, MintError> {
        let transport = ReqwestTransport::new(self.config.timeout)?;
        Ok(self.build_with_transport(transport))
    }

    /// Build over a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(self, transport: T) -> MintClient<T> {
        MintClient {
            transport: Arc::new(transport),
            config: Arc::new(self.config),
            in_flight: InFlight::default(),
        }
    }
}
