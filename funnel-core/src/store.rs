//! In-memory form state for one funnel traversal.

use tracing::debug;

use crate::models::{BusinessData, BusinessDataPatch};

/// Owns the single [`BusinessData`] record and applies partial updates.
///
/// No validation happens at this layer; callers are responsible for
/// invariant maintenance (the wizard controller recomputes the derived
/// opportunity list after relevant merges).
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    data: BusinessData,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    pub fn data(&self) -> &BusinessData {
        &self.data
    }

    /// Shallow-merges the patch over the current state and returns the new
    /// snapshot.
    ///
    /// Sub-objects (`spending`, `ai_opportunities`,
    /// `selected_consultation_areas`) are replaced whole.
    pub fn merge(&mut self, patch: BusinessDataPatch) -> &BusinessData {
        if let Some(business_name) = patch.business_name {
            self.data.business_name = business_name;
        }
        if let Some(owner_name) = patch.owner_name {
            self.data.owner_name = owner_name;
        }
        if let Some(email) = patch.email {
            self.data.email = email;
        }
        if let Some(industry) = patch.industry {
            self.data.industry = industry;
        }
        if let Some(niche) = patch.niche {
            self.data.niche = niche;
        }
        if let Some(ai_opportunities) = patch.ai_opportunities {
            self.data.ai_opportunities = ai_opportunities;
        }
        if let Some(spending) = patch.spending {
            self.data.spending = spending;
        }
        if let Some(selected) = patch.selected_consultation_areas {
            self.data.selected_consultation_areas = selected;
        }

        debug!(
            industry = %self.data.industry,
            niche = %self.data.niche,
            spending_entries = self.data.spending.len(),
            "merged patch into form state"
        );

        &self.data
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::SpendingMap;

    #[test]
    fn merge_applies_only_set_fields() {
        let mut store = FormStore::new();
        store.merge(BusinessDataPatch {
            business_name: Some("Acme Dental".to_string()),
            email: Some("owner@acme.test".to_string()),
            ..Default::default()
        });

        let data = store.data();
        assert_eq!(data.business_name, "Acme Dental");
        assert_eq!(data.email, "owner@acme.test");
        assert_eq!(data.owner_name, "");
    }

    #[test]
    fn merge_replaces_spending_wholesale() {
        let mut store = FormStore::new();

        let mut first = SpendingMap::new();
        first.set("A", dec!(100));
        first.set("B", dec!(200));
        store.merge(BusinessDataPatch {
            spending: Some(first),
            ..Default::default()
        });

        // A patch carrying only "B" drops "A": callers must pass the full
        // updated sub-object.
        let mut second = SpendingMap::new();
        second.set("B", dec!(250));
        store.merge(BusinessDataPatch {
            spending: Some(second),
            ..Default::default()
        });

        assert_eq!(store.data().spending.get("A"), Decimal::ZERO);
        assert_eq!(store.data().spending.get("B"), dec!(250));
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut store = FormStore::new();
        store.merge(BusinessDataPatch {
            owner_name: Some("Jo".to_string()),
            ..Default::default()
        });
        let before = store.data().clone();

        store.merge(BusinessDataPatch::default());

        assert_eq!(store.data(), &before);
    }
}
