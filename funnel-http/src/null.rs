use async_trait::async_trait;
use tracing::info;

use funnel_core::gateway::{GatewayError, LeadGateway};
use funnel_core::models::{BookingPayload, LeadPayload};

/// Gateway that accepts everything without performing I/O.
///
/// Used for dry runs and when no endpoint is configured, so the funnel can
/// be walked end to end without an upstream.
#[derive(Debug, Clone, Default)]
pub struct NullGateway;

#[async_trait]
impl LeadGateway for NullGateway {
    async fn submit_lead(&self, lead: &LeadPayload) -> Result<(), GatewayError> {
        info!(
            business = %lead.business_name,
            email = %lead.email,
            "dry run: lead accepted locally"
        );
        Ok(())
    }

    async fn book_consultation(&self, booking: &BookingPayload) -> Result<(), GatewayError> {
        info!(
            email = %booking.email,
            areas = booking.selected_areas.len(),
            total = %booking.total_potential_savings,
            "dry run: consultation booking accepted locally"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[tokio::test]
    async fn accepts_everything() {
        let gateway = NullGateway;

        let lead = LeadPayload {
            business_name: "Acme".to_string(),
            owner_name: "Jo".to_string(),
            email: "jo@acme.test".to_string(),
        };
        assert!(gateway.submit_lead(&lead).await.is_ok());

        let booking = BookingPayload {
            business_name: "Acme".to_string(),
            owner_name: "Jo".to_string(),
            email: "jo@acme.test".to_string(),
            selected_areas: vec![],
            total_potential_savings: dec!(0),
        };
        assert!(gateway.book_consultation(&booking).await.is_ok());
    }
}
