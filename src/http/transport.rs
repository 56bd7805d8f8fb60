//! Outbound transport: one POST in, status plus body text out.

use std::future::Future;

use crate::error::MintError;

/// A fully prepared request. Headers are sent in order.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl OutgoingRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Whatever the server answered, unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a POST and hands back the raw response.
///
/// Implementations must not retry: each call is exactly one request.
pub trait Transport: Send + Sync {
    fn post(
        &self,
        request: OutgoingRequest,
    ) -> impl Future<Output = Result<RawResponse, MintError>> + Send;
}

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use std::time::Duration;

    use reqwest::Client;

    use super::{OutgoingRequest, RawResponse, Transport};
    use crate::error::MintError;

    /// [`Transport`] backed by a pooled `reqwest::Client`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
    }

    impl ReqwestTransport {
        /// `timeout: None` lets a hung request block indefinitely.
        pub fn new(timeout: Option<Duration>) -> Result<Self, MintError> {
            let mut builder = Client::builder().pool_max_idle_per_host(10);
            if let Some(t) = timeout {
                builder = builder.timeout(t);
            }
            Ok(Self {
                client: builder.build()?,
            })
        }
    }

    impl Transport for ReqwestTransport {
        async fn post(&self, request: OutgoingRequest) -> Result<RawResponse, MintError> {
            let mut req = self.client.post(&request.url);
            for (name, value) in &request.headers {
                req = req.header(name.as_str(), value.as_str());
            }

            let resp = req.body(request.body).send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;

            Ok(RawResponse { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = OutgoingRequest {
            url: "http://localhost".into(),
            headers: vec![("X-API-KEY".into(), "k".into())],
            body: Vec::new(),
        };
        assert_eq!(req.header("x-api-key"), Some("k"));
        assert_eq!(req.header("Content-Type"), None);
    }
}
