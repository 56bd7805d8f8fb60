//! HTTP layer — the [`Transport`] seam, its reqwest implementation and the
//! status policy applied to responses.

pub mod policy;
pub mod transport;

pub use policy::StatusPolicy;
pub use transport::{OutgoingRequest, RawResponse, Transport};

#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
