//! IP asset domain — voice asset input, the mint request payload and the
//! submission result.

#[cfg(feature = "http")]
pub mod client;
pub mod result;
pub mod wire;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::MintError;

pub use result::{MintResponse, MintResult};
pub use wire::{
    Attribute, Creator, IpAssetMetadata, IpType, LicenseTerm, LicenseTermValues, Media,
    MintRequest, NftMetadata,
};

// ─── Fixed payload values ────────────────────────────────────────────────────

pub const OWNER_LOCATOR: &str = "email:creator@example.com:story-testnet";
pub const CREATOR_NAME: &str = "AI Voice Labs";
pub const CREATOR_EMAIL: &str = "creator@example.com";
pub const VOICE_MIME_TYPE: &str = "audio/mpeg";

pub const COMMERCIAL_LICENSE_TYPE: &str = "commercial-use";
pub const COMMERCIAL_MINTING_FEE: u64 = 100;
/// Fee currency token on Story testnet.
pub const COMMERCIAL_FEE_CURRENCY: &str = "0x1514000000000000000000000000000000000000";

// ─── Sample asset ────────────────────────────────────────────────────────────

pub const SAMPLE_CHARACTER_NAME: &str = "Morgan Freeman";
pub const SAMPLE_IMAGE_URL: &str =
    "https://futureoflife.org/wp-content/uploads/2020/08/Morgan-Freeman-net-worth-1-e1597654595477.jpg";
pub const SAMPLE_VOICE_URL: &str =
    "https://gateway.pinata.cloud/ipfs/Qmcuzm3oknzQ8eRSekyjAYw37GPvG4eTn2EcEsNscyZFoY";

// ─── VoiceAsset ──────────────────────────────────────────────────────────────

/// User-supplied description of a voice to mint.
///
/// Two assets are considered the same submission when all fields match; the
/// client uses this to refuse a duplicate while the first is still in flight.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceAsset {
    pub character_name: String,
    pub image_url: String,
    /// Expected to point at an MP3 sample.
    pub voice_url: String,
    /// Attach the commercial-use license terms.
    pub license_terms: bool,
}

impl VoiceAsset {
    pub fn new(
        character_name: impl Into<String>,
        image_url: impl Into<String>,
        voice_url: impl Into<String>,
    ) -> Self {
        Self {
            character_name: character_name.into(),
            image_url: image_url.into(),
            voice_url: voice_url.into(),
            license_terms: false,
        }
    }

    /// The fixed demo asset.
    pub fn sample() -> Self {
        Self::new(SAMPLE_CHARACTER_NAME, SAMPLE_IMAGE_URL, SAMPLE_VOICE_URL)
    }

    pub fn with_license_terms(mut self, enabled: bool) -> Self {
        self.license_terms = enabled;
        self
    }

    /// Reject blank fields. URLs are not checked for well-formedness.
    pub fn validate(&self) -> Result<(), MintError> {
        let fields = [
            ("character name", &self.character_name),
            ("image URL", &self.image_url),
            ("voice URL", &self.voice_url),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(MintError::Validation(format!(
                "missing {}",
                missing.join(", ")
            )))
        }
    }
}

// ─── MintRequest construction ────────────────────────────────────────────────

impl MintRequest {
    /// Build the voice IP asset payload for `asset`, stamped with `created_at`.
    pub fn voice(asset: &VoiceAsset, created_at: DateTime<Utc>) -> Self {
        let name = asset.character_name.as_str();

        Self {
            owner: OWNER_LOCATOR.to_string(),
            nft_metadata: NftMetadata {
                name: format!("{name} Voice License"),
                description: format!("A voice sample of the iconic narration style of {name}"),
                image: asset.image_url.clone(),
            },
            ip_asset_metadata: IpAssetMetadata {
                title: format!("{name} Voice Model"),
                created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                ip_type: IpType::Voice,
                creators: vec![Creator {
                    name: CREATOR_NAME.to_string(),
                    email: CREATOR_EMAIL.to_string(),
                    crossmint_user_locator: OWNER_LOCATOR.to_string(),
                    contribution_percent: 100,
                }],
                media: vec![Media {
                    name: format!("{name} Voice Sample"),
                    url: asset.voice_url.clone(),
                    mime_type: VOICE_MIME_TYPE.to_string(),
                }],
                attributes: vec![
                    Attribute::new("Voice Type", "Narration"),
                    Attribute::new("Voice Character", name),
                    Attribute::new("License Type", "Commercial Use"),
                ],
            },
            license_terms: asset.license_terms.then(|| {
                vec![LicenseTerm {
                    kind: COMMERCIAL_LICENSE_TYPE.to_string(),
                    terms: LicenseTermValues {
                        default_minting_fee: COMMERCIAL_MINTING_FEE,
                        currency: COMMERCIAL_FEE_CURRENCY.to_string(),
                    },
                }]
            }),
        }
    }

    /// Sum of creator contribution percentages.
    pub fn contribution_total(&self) -> u32 {
        self.ip_asset_metadata
            .creators
            .iter()
            .map(|c| c.contribution_percent)
            .sum()
    }

    /// Check payload invariants before sending.
    pub fn validate(&self) -> Result<(), MintError> {
        if self.ip_asset_metadata.creators.is_empty() {
            return Err(MintError::Validation("no creators".to_string()));
        }
        let total = self.contribution_total();
        if total != 100 {
            return Err(MintError::Validation(format!(
                "creator contributions sum to {total}, expected 100"
            )));
        }
        Ok(())
    }
}
