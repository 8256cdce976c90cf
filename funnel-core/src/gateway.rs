//! Outbound boundary for lead submission and consultation booking.
//!
//! The core only assembles payloads; delivery is behind this trait so the
//! wizard can run against HTTP, a recording stub in tests, or nothing at
//! all. Failures are transient and retryable: the calling step stays put
//! and merges nothing into the store until the call succeeds.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{BookingPayload, LeadPayload};

/// Errors surfaced by an outbound gateway.
///
/// Both variants are non-fatal from the funnel's point of view; the user is
/// offered a retry.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The request never produced a response (connection, DNS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait LeadGateway: Send + Sync {
    async fn submit_lead(&self, lead: &LeadPayload) -> Result<(), GatewayError>;

    async fn book_consultation(&self, booking: &BookingPayload) -> Result<(), GatewayError>;
}
