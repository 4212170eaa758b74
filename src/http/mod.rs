//! Common request/response layer
//!
//! Every per-resource wrapper in [`crate::services`] funnels through this
//! module: a fluent builder assembles one HTTP call, the transport executes
//! it, and the response wrapper classifies the outcome.
//!
//! # Module Structure
//!
//! - [`query`] - query-parameter encoding with empty/zero filtering
//! - [`request`] - the fluent request builder
//! - [`response`] - success/failure classification and JSON decoding
//! - `transport` - thin `reqwest` wrapper (crate-internal)

pub mod query;
pub mod request;
pub mod response;
pub(crate) mod transport;

pub use request::RequestBuilder;
pub use response::ApiResponse;
