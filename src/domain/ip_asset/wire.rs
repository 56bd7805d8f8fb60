//! Wire types for `POST /api/v1/ip/collections/{id}/ipassets`.

use serde::{Deserialize, Serialize};

/// Request body for IP asset creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintRequest {
    /// Owner locator, `scheme:identifier:network`.
    pub owner: String,
    pub nft_metadata: NftMetadata,
    pub ip_asset_metadata: IpAssetMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_terms: Option<Vec<LicenseTerm>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftMetadata {
    pub name: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAssetMetadata {
    pub title: String,
    /// ISO-8601 timestamp, UTC.
    pub created_at: String,
    pub ip_type: IpType,
    #[serde(default)]
    pub creators: Vec<Creator>,
    #[serde(default)]
    pub media: Vec<Media>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum IpType {
    Voice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    pub name: String,
    pub email: String,
    pub crossmint_user_locator: String,
    pub contribution_percent: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub name: String,
    pub url: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseTerm {
    #[serde(rename = "type")]
    pub kind: String,
    pub terms: LicenseTermValues,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTermValues {
    pub default_minting_fee: u64,
    /// Token contract address the fee is paid in.
    pub currency: String,
}
