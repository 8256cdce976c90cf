use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload for the outbound lead-submission endpoint.
///
/// Field names are camelCase on the wire to match the endpoint contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
}

/// Payload for the outbound consultation-booking endpoint.
///
/// `total_potential_savings` is the aggregated monthly savings across the
/// positive-spend entries of the current opportunity list, not just the
/// selected areas. Actual scheduling is delegated to an external calendar
/// widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub selected_areas: Vec<String>,
    pub total_potential_savings: Decimal,
}
