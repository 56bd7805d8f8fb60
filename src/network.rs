//! Network constants for the Crossmint IP API.

/// Default REST API base URL (staging).
pub const DEFAULT_API_URL: &str = "https://staging.crossmint.com";

/// Collection that voice IP assets are minted into.
pub const DEFAULT_COLLECTION_ID: &str = "f44f5c02-6fb4-4841-9423-e1e192a1c539";

/// Header carrying the server-side API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Build the IP asset creation endpoint for a collection.
pub fn collection_assets_url(base_url: &str, collection_id: &str) -> String {
    format!(
        "{}/api/v1/ip/collections/{}/ipassets",
        base_url.trim_end_matches('/'),
        urlencoding::encode(collection_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_collection_url() {
        assert_eq!(
            collection_assets_url(DEFAULT_API_URL, DEFAULT_COLLECTION_ID),
            "https://staging.crossmint.com/api/v1/ip/collections/f44f5c02-6fb4-4841-9423-e1e192a1c539/ipassets"
        );
    }

    #[test]
    fn test_trailing_slash_and_encoding() {
        assert_eq!(
            collection_assets_url("http://localhost:8080/", "a b"),
            "http://localhost:8080/api/v1/ip/collections/a%20b/ipassets"
        );
    }
}
