//! Savings computations for the funnel.
//!
//! Every function here is pure and cheap, so derived numbers are recomputed
//! on every read rather than cached. All arithmetic is exact [`Decimal`]
//! arithmetic; rounding happens only at display time (see [`crate::format`]).
//!
//! # Computation model
//!
//! | Quantity | Formula |
//! |---------------------|--------------------------------------------|
//! | per-entry savings | spending × benchmark percentage / 100 |
//! | total savings | sum of per-entry savings, spending > 0 only |
//! | daily view | monthly total / 30 |
//! | yearly view | monthly total × 12 |
//! | savings ratio | total savings / total spending × 100 |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::{Period, SpendingMap};

/// One positive-spend opportunity in a savings breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsLine {
    pub opportunity: String,
    /// Self-reported monthly spending on this opportunity.
    pub spending: Decimal,
    /// Projected monthly savings: `spending × percentage / 100`.
    pub savings: Decimal,
    /// Benchmark percentage the savings were computed from.
    pub percentage: u32,
}

/// Aggregated savings across a spending map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavingsSummary {
    /// Positive-spend entries, sorted descending by savings. Ties keep the
    /// spending map's insertion order.
    pub lines: Vec<SavingsLine>,
    /// Total across all entries, zero-spend included.
    pub total_spending: Decimal,
    /// Total across the positive-spend entries.
    pub total_savings: Decimal,
}

impl SavingsSummary {
    /// Savings as a percentage of spending, zero when nothing was spent.
    pub fn savings_ratio(&self) -> Decimal {
        percentage_of_total(self.total_savings, self.total_spending)
    }
}

/// Projected savings for one opportunity.
///
/// Exact for rational monetary inputs; no rounding is applied.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use funnel_core::engine::compute_savings;
///
/// assert_eq!(compute_savings(dec!(1000.00), 80), dec!(800.00));
/// assert_eq!(compute_savings(dec!(0.00), 85), dec!(0.00));
/// ```
pub fn compute_savings(spending: Decimal, benchmark_pct: u32) -> Decimal {
    spending * Decimal::from(benchmark_pct) / Decimal::ONE_HUNDRED
}

/// Aggregates a spending map into a sorted savings breakdown.
///
/// Entries with zero spend are excluded from the breakdown but still counted
/// toward `total_spending`. The sort is stable, so opportunities with equal
/// savings keep their original insertion order.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use funnel_core::catalog::Catalog;
/// use funnel_core::engine::aggregate;
/// use funnel_core::models::SpendingMap;
///
/// let catalog = Catalog::builtin();
/// let mut spending = SpendingMap::new();
/// spending.set("Patient Appointment Scheduling", dec!(1000));
/// spending.set("Insurance Verification", dec!(0));
///
/// let summary = aggregate(&catalog, &spending);
///
/// assert_eq!(summary.lines.len(), 1);
/// assert_eq!(summary.total_savings, dec!(800.00));
/// ```
pub fn aggregate(catalog: &Catalog, spending: &SpendingMap) -> SavingsSummary {
    let mut lines: Vec<SavingsLine> = spending
        .iter()
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .map(|(opportunity, amount)| {
            let percentage = catalog.benchmark(opportunity);
            SavingsLine {
                opportunity: opportunity.to_string(),
                spending: amount,
                savings: compute_savings(amount, percentage),
                percentage,
            }
        })
        .collect();

    // Stable sort: equal savings keep insertion order.
    lines.sort_by(|a, b| b.savings.cmp(&a.savings));

    let total_savings = lines.iter().map(|line| line.savings).sum();

    SavingsSummary {
        lines,
        total_spending: spending.total(),
        total_savings,
    }
}

/// Aggregates only the entries whose label appears in `areas`.
///
/// Used by the consultation step, which re-runs the engine restricted to the
/// user-selected subset. Filtering and sorting behave as in [`aggregate`].
pub fn aggregate_selected(
    catalog: &Catalog,
    spending: &SpendingMap,
    areas: &[String],
) -> SavingsSummary {
    let mut selected = SpendingMap::new();
    for (opportunity, amount) in spending.iter() {
        if areas.iter().any(|area| area == opportunity) {
            selected.set(opportunity, amount);
        }
    }
    aggregate(catalog, &selected)
}

/// Converts a monthly amount into the requested view period.
///
/// Anchored to the monthly baseline: `daily = monthly / 30`,
/// `yearly = monthly × 12`, `monthly` is the identity.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use funnel_core::engine::convert_period;
/// use funnel_core::models::Period;
///
/// assert_eq!(convert_period(dec!(800.00), Period::Yearly), dec!(9600.00));
/// assert_eq!(convert_period(dec!(900.00), Period::Daily), dec!(30.00));
/// ```
pub fn convert_period(monthly: Decimal, period: Period) -> Decimal {
    match period {
        Period::Daily => monthly / Decimal::from(30),
        Period::Monthly => monthly,
        Period::Yearly => monthly * Decimal::from(12),
    }
}

/// Savings as a percentage of spending.
///
/// Defined as zero when `total_spending` is zero; division by zero is not an
/// error here.
pub fn percentage_of_total(total_savings: Decimal, total_spending: Decimal) -> Decimal {
    if total_spending > Decimal::ZERO {
        total_savings / total_spending * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    // =========================================================================
    // compute_savings tests
    // =========================================================================

    #[test]
    fn compute_savings_applies_benchmark_percentage() {
        assert_eq!(compute_savings(dec!(1000.00), 80), dec!(800.00));
        assert_eq!(compute_savings(dec!(250.50), 50), dec!(125.25));
    }

    #[test]
    fn compute_savings_is_zero_for_zero_spending() {
        for pct in [0, 1, 60, 100] {
            assert_eq!(compute_savings(Decimal::ZERO, pct), Decimal::ZERO);
        }
    }

    #[test]
    fn compute_savings_full_percentage_returns_spending() {
        assert_eq!(compute_savings(dec!(123.45), 100), dec!(123.45));
    }

    #[test]
    fn compute_savings_is_exact_for_monetary_inputs() {
        // 0.01 at 33% must not accumulate binary-float noise.
        assert_eq!(compute_savings(dec!(0.01), 33), dec!(0.0033));
    }

    // =========================================================================
    // aggregate tests
    // =========================================================================

    #[test]
    fn aggregate_excludes_zero_spend_entries() {
        let mut spending = SpendingMap::new();
        spending.set("Patient Appointment Scheduling", dec!(1000));
        spending.set("Insurance Verification", dec!(0));

        let summary = aggregate(&catalog(), &spending);

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines[0].opportunity, "Patient Appointment Scheduling");
    }

    #[test]
    fn aggregate_sorts_descending_by_savings() {
        let mut spending = SpendingMap::new();
        // 60% of 100 = 60, 80% of 1000 = 800, 70% of 500 = 350
        spending.set("Prescription Management", dec!(100));
        spending.set("Patient Appointment Scheduling", dec!(1000));
        spending.set("Insurance Verification", dec!(500));

        let summary = aggregate(&catalog(), &spending);

        let savings: Vec<Decimal> = summary.lines.iter().map(|line| line.savings).collect();
        assert_eq!(savings, vec![dec!(800.00), dec!(350.00), dec!(60.00)]);
    }

    #[test]
    fn aggregate_breaks_ties_by_insertion_order() {
        let mut spending = SpendingMap::new();
        // Both unknown labels default to 60%, so equal spend gives equal
        // savings; insertion order must win.
        spending.set("Task B", dec!(100));
        spending.set("Task A", dec!(100));
        spending.set("Task C", dec!(100));

        let summary = aggregate(&catalog(), &spending);

        let order: Vec<&str> = summary
            .lines
            .iter()
            .map(|line| line.opportunity.as_str())
            .collect();
        assert_eq!(order, vec!["Task B", "Task A", "Task C"]);
    }

    #[test]
    fn aggregate_counts_zero_spend_toward_total_spending() {
        let mut spending = SpendingMap::new();
        spending.set("Patient Appointment Scheduling", dec!(1000));
        spending.set("Insurance Verification", dec!(0));

        let summary = aggregate(&catalog(), &spending);

        assert_eq!(summary.total_spending, dec!(1000));
        assert_eq!(summary.total_savings, dec!(800.00));
    }

    #[test]
    fn aggregate_uses_default_percentage_for_unknown_label() {
        let mut spending = SpendingMap::new();
        spending.set("Custom Task", dec!(200));

        let summary = aggregate(&catalog(), &spending);

        assert_eq!(summary.lines[0].percentage, 60);
        assert_eq!(summary.lines[0].savings, dec!(120.00));
    }

    #[test]
    fn aggregate_of_empty_map_is_empty() {
        let summary = aggregate(&catalog(), &SpendingMap::new());

        assert_eq!(summary, SavingsSummary::default());
        assert_eq!(summary.savings_ratio(), Decimal::ZERO);
    }

    // =========================================================================
    // aggregate_selected tests
    // =========================================================================

    #[test]
    fn aggregate_selected_restricts_to_chosen_areas() {
        let mut spending = SpendingMap::new();
        spending.set("Patient Appointment Scheduling", dec!(1000));
        spending.set("Insurance Verification", dec!(500));

        let areas = vec!["Insurance Verification".to_string()];
        let summary = aggregate_selected(&catalog(), &spending, &areas);

        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total_savings, dec!(350.00));
    }

    #[test]
    fn aggregate_selected_with_no_areas_is_empty() {
        let mut spending = SpendingMap::new();
        spending.set("Patient Appointment Scheduling", dec!(1000));

        let summary = aggregate_selected(&catalog(), &spending, &[]);

        assert_eq!(summary.lines.len(), 0);
        assert_eq!(summary.total_savings, Decimal::ZERO);
    }

    // =========================================================================
    // convert_period tests
    // =========================================================================

    #[test]
    fn convert_period_monthly_is_identity() {
        assert_eq!(convert_period(dec!(800.00), Period::Monthly), dec!(800.00));
    }

    #[test]
    fn convert_period_yearly_multiplies_by_twelve() {
        assert_eq!(convert_period(dec!(800.00), Period::Yearly), dec!(9600.00));
    }

    #[test]
    fn convert_period_daily_divides_by_thirty() {
        assert_eq!(
            convert_period(dec!(900.00), Period::Daily),
            dec!(900.00) / dec!(30)
        );
    }

    // =========================================================================
    // percentage_of_total tests
    // =========================================================================

    #[test]
    fn percentage_of_total_computes_ratio() {
        assert_eq!(percentage_of_total(dec!(800), dec!(1000)), dec!(80));
    }

    #[test]
    fn percentage_of_total_is_zero_when_nothing_spent() {
        assert_eq!(percentage_of_total(dec!(0), dec!(0)), Decimal::ZERO);
        assert_eq!(percentage_of_total(dec!(100), dec!(0)), Decimal::ZERO);
    }

    // =========================================================================
    // scenario tests
    // =========================================================================

    #[test]
    fn healthcare_general_practice_scenario() {
        let catalog = catalog();
        let opportunities = catalog.opportunities("Healthcare", "General Practice");
        assert_eq!(opportunities.len(), 6);

        let mut spending = SpendingMap::new();
        spending.set("Patient Appointment Scheduling", dec!(1000));

        let summary = aggregate(&catalog, &spending);

        assert_eq!(summary.total_savings, dec!(800.00));
        assert_eq!(
            convert_period(summary.total_savings, Period::Yearly),
            dec!(9600.00)
        );
    }
}
