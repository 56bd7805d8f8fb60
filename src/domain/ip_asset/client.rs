//! IP assets sub-client — build and submit voice asset mint requests.

use chrono::Utc;
use serde_json::Value;

use crate::client::MintClient;
use crate::domain::ip_asset::{MintRequest, MintResponse, MintResult, VoiceAsset};
use crate::error::MintError;
use crate::http::{OutgoingRequest, Transport};
use crate::network::API_KEY_HEADER;

pub struct IpAssets<'a, T> {
    pub(crate) client: &'a MintClient<T>,
}

impl<'a, T: Transport> IpAssets<'a, T> {
    /// Validate `asset` and build its payload, stamped with the current time.
    pub fn build_request(&self, asset: &VoiceAsset) -> Result<MintRequest, MintError> {
        asset.validate()?;
        let request = MintRequest::voice(asset, Utc::now());
        request.validate()?;
        Ok(request)
    }

    /// Submit `asset` and fold every fault into [`MintResult::Failure`].
    ///
    /// Status handling follows the configured
    /// [`crate::http::StatusPolicy`].
    pub async fn submit(&self, asset: &VoiceAsset) -> MintResult {
        match self.try_submit(asset).await {
            Ok(response) => self.client.config.status_policy.classify(response),
            Err(e) => {
                tracing::warn!(
                    character = %asset.character_name,
                    error = %e,
                    "IP asset submission failed"
                );
                MintResult::Failure(e.to_string())
            }
        }
    }

    /// Submit `asset`, returning the parsed body of any response regardless of
    /// status. Sends exactly one request; no retries.
    pub async fn try_submit(&self, asset: &VoiceAsset) -> Result<MintResponse, MintError> {
        let request = self.build_request(asset)?;
        let _guard = self.client.in_flight.acquire(asset)?;
        self.post(&request).await
    }

    async fn post(&self, request: &MintRequest) -> Result<MintResponse, MintError> {
        let url = self.client.collection_url();
        let outgoing = OutgoingRequest {
            url: url.clone(),
            headers: vec![
                (
                    API_KEY_HEADER.to_string(),
                    self.client.config.api_key.clone(),
                ),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body: serde_json::to_vec(request)?,
        };

        tracing::debug!(url = %url, title = %request.ip_asset_metadata.title, "Submitting IP asset");
        let raw = self.client.transport.post(outgoing).await?;
        let status = raw.status;
        tracing::debug!(status, "IP asset response received");
        tracing::trace!(status, body = %raw.body, "Raw IP asset response");

        if raw.body.trim().is_empty() {
            return Err(MintError::EmptyResponse);
        }

        let body: Value = serde_json::from_str(&raw.body).map_err(|source| MintError::Parse {
            source,
            raw: raw.body,
        })?;

        Ok(MintResponse { status, body })
    }
}
