//! HTTP implementation of the funnel's outbound gateway.

mod http;
mod null;

pub use http::HttpLeadGateway;
pub use null::NullGateway;
