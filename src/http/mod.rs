//! HTTP layer — `MailflowHttp` dispatch plus the pluggable transport.

pub mod client;
pub mod transport;

pub use client::MailflowHttp;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{HttpMethod, HttpTransport, RequestEnvelope, TransportResponse};
