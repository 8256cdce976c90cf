use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// View period for the savings dashboard.
///
/// Conversions are always anchored to a monthly baseline: flat /30 for daily
/// and ×12 for yearly, with no calendar-accurate day counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    Daily,
    #[default]
    Monthly,
    Yearly,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[Period::Daily, Period::Monthly, Period::Yearly]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Monthly => "monthly",
            Period::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Daily => "Daily",
            Period::Monthly => "Monthly",
            Period::Yearly => "Yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Period::Daily),
            "monthly" => Some(Period::Monthly),
            "yearly" => Some(Period::Yearly),
            _ => None,
        }
    }
}

/// Period in which the user enters spending amounts on the spending step.
///
/// Distinct from [`Period`]: entry amounts are annualised directly (×52 for
/// weekly, ×12 for monthly) rather than converted through the monthly
/// baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntryPeriod {
    Weekly,
    #[default]
    Monthly,
}

impl EntryPeriod {
    pub fn all() -> &'static [EntryPeriod] {
        &[EntryPeriod::Weekly, EntryPeriod::Monthly]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPeriod::Weekly => "weekly",
            EntryPeriod::Monthly => "monthly",
        }
    }

    /// Factor projecting an entry-period amount to a yearly figure.
    pub fn annual_factor(&self) -> Decimal {
        match self {
            EntryPeriod::Weekly => Decimal::from(52),
            EntryPeriod::Monthly => Decimal::from(12),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn period_parse_round_trips() {
        for period in Period::all() {
            assert_eq!(Period::parse(period.as_str()), Some(*period));
        }
        assert_eq!(Period::parse("quarterly"), None);
    }

    #[test]
    fn entry_period_annual_factors() {
        assert_eq!(EntryPeriod::Weekly.annual_factor(), dec!(52));
        assert_eq!(EntryPeriod::Monthly.annual_factor(), dec!(12));
    }
}
