use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info};

use funnel_core::gateway::{GatewayError, LeadGateway};
use funnel_core::models::{BookingPayload, LeadPayload};

/// [`LeadGateway`] backed by JSON POSTs to configured endpoints.
///
/// Requests carry a bearer token when an API key is configured. Any
/// non-success status is reported as a rejection with the response body, so
/// the calling step can surface it and offer a retry.
#[derive(Clone)]
pub struct HttpLeadGateway {
    client: reqwest::Client,
    leads_endpoint: String,
    booking_endpoint: String,
    api_key: Option<String>,
}

/// Lead submission wire format: the payload plus a submission timestamp,
/// matching what the endpoint records.
#[derive(Serialize)]
struct TimestampedLead<'a> {
    #[serde(flatten)]
    lead: &'a LeadPayload,
    timestamp: String,
}

impl HttpLeadGateway {
    pub fn new(
        leads_endpoint: impl Into<String>,
        booking_endpoint: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            leads_endpoint: leads_endpoint.into(),
            booking_endpoint: booking_endpoint.into(),
            api_key,
        }
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<(), GatewayError> {
        let mut request = self.client.post(endpoint).json(body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(endpoint, status = status.as_u16(), "outbound call succeeded");
        Ok(())
    }
}

#[async_trait]
impl LeadGateway for HttpLeadGateway {
    async fn submit_lead(&self, lead: &LeadPayload) -> Result<(), GatewayError> {
        info!(email = %lead.email, "submitting lead");
        let body = TimestampedLead {
            lead,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        self.post_json(&self.leads_endpoint, &body).await
    }

    async fn book_consultation(&self, booking: &BookingPayload) -> Result<(), GatewayError> {
        info!(
            email = %booking.email,
            areas = booking.selected_areas.len(),
            "booking consultation"
        );
        self.post_json(&self.booking_endpoint, booking).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn lead_wire_format_is_camel_case_with_timestamp() {
        let lead = LeadPayload {
            business_name: "Acme Dental".to_string(),
            owner_name: "Jo Smith".to_string(),
            email: "jo@acme.test".to_string(),
        };
        let body = TimestampedLead {
            lead: &lead,
            timestamp: "2025-01-01T00:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["businessName"], "Acme Dental");
        assert_eq!(value["ownerName"], "Jo Smith");
        assert_eq!(value["email"], "jo@acme.test");
        assert_eq!(value["timestamp"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn booking_wire_format_is_camel_case() {
        let booking = BookingPayload {
            business_name: "Acme Dental".to_string(),
            owner_name: "Jo Smith".to_string(),
            email: "jo@acme.test".to_string(),
            selected_areas: vec!["Insurance Verification".to_string()],
            total_potential_savings: dec!(800.00),
        };

        let value = serde_json::to_value(&booking).unwrap();

        assert_eq!(value["businessName"], "Acme Dental");
        assert_eq!(value["selectedAreas"][0], "Insurance Verification");
        assert_eq!(value["totalPotentialSavings"], "800.00");
    }

    #[tokio::test]
    async fn transport_failure_is_retryable_not_fatal() {
        // Unroutable endpoint: must come back as a Transport error, never a
        // panic or a rejection.
        let gateway = HttpLeadGateway::new(
            "http://127.0.0.1:1/leads",
            "http://127.0.0.1:1/bookings",
            None,
        );
        let lead = LeadPayload {
            business_name: "Acme".to_string(),
            owner_name: "Jo".to_string(),
            email: "jo@acme.test".to_string(),
        };

        let err = gateway.submit_lead(&lead).await.unwrap_err();

        assert!(matches!(err, GatewayError::Transport(_)));
    }
}
