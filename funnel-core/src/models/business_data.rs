use serde::{Deserialize, Serialize};

use super::SpendingMap;

/// The single shared state record for one funnel traversal.
///
/// Created empty at funnel entry, threaded through every step, and discarded
/// when the traversal ends. There is exactly one writer and one reader at any
/// instant, so no locking is involved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessData {
    pub business_name: String,
    pub owner_name: String,
    pub email: String,

    /// Empty string means "unset". Together with `niche` this resolves to a
    /// catalog key.
    pub industry: String,
    pub niche: String,

    /// Derived field: always equal to the catalog lookup for the current
    /// industry/niche pair. Maintained by the wizard controller's
    /// opportunity sync, never edited by the user directly.
    pub ai_opportunities: Vec<String>,

    pub spending: SpendingMap,

    /// Subset of positive-spend opportunities chosen for consultation.
    /// Uniqueness is enforced by the toggle logic, not by this type.
    pub selected_consultation_areas: Vec<String>,
}

impl BusinessData {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three identity fields are present (non-blank).
    pub fn has_identity(&self) -> bool {
        !self.business_name.trim().is_empty()
            && !self.owner_name.trim().is_empty()
            && !self.email.trim().is_empty()
    }

    /// Both industry and niche have been selected.
    pub fn has_niche(&self) -> bool {
        !self.industry.is_empty() && !self.niche.is_empty()
    }
}

/// Partial update over [`BusinessData`].
///
/// `Some` fields shallow-merge over the current state; sub-objects such as
/// `spending` are replaced whole, never deep-merged, so callers must pass the
/// full updated value.
#[derive(Debug, Clone, Default)]
pub struct BusinessDataPatch {
    pub business_name: Option<String>,
    pub owner_name: Option<String>,
    pub email: Option<String>,
    pub industry: Option<String>,
    pub niche: Option<String>,
    pub ai_opportunities: Option<Vec<String>>,
    pub spending: Option<SpendingMap>,
    pub selected_consultation_areas: Option<Vec<String>>,
}

impl BusinessDataPatch {
    /// Whether applying this patch can invalidate the derived opportunity
    /// list.
    pub fn touches_niche_inputs(&self) -> bool {
        self.industry.is_some() || self.niche.is_some()
    }
}
