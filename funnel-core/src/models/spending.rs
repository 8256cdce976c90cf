use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sparse spending amounts keyed by opportunity label.
///
/// Backed by a `Vec` so that first-insertion order is preserved; the savings
/// breakdown relies on that order to break ties between equal savings
/// amounts. An absent key means zero spend. Entries are never removed, even
/// when a niche change drops the label from the active opportunity list, so
/// a previously entered amount resurfaces if the user returns to a niche
/// sharing that label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingMap(Vec<(String, Decimal)>);

impl SpendingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Amount recorded for `label`, or zero when absent.
    pub fn get(&self, label: &str) -> Decimal {
        self.0
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, amount)| *amount)
            .unwrap_or(Decimal::ZERO)
    }

    /// Records `amount` for `label`, replacing any previous value in place.
    ///
    /// A replaced entry keeps its original position.
    pub fn set(&mut self, label: &str, amount: Decimal) {
        match self.0.iter_mut().find(|(key, _)| key == label) {
            Some((_, existing)) => *existing = amount,
            None => self.0.push((label.to_string(), amount)),
        }
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(key, amount)| (key.as_str(), *amount))
    }

    /// Sum of all recorded amounts, including zero entries.
    pub fn total(&self) -> Decimal {
        self.0.iter().map(|(_, amount)| *amount).sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
