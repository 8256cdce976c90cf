//! Wizard step machine and state-update coordination.
//!
//! The controller owns the form store and the catalog, keeps the current
//! step inside [1, 6], and runs the opportunity-sync invariant check after
//! every merge that touches `industry` or `niche`. Transition *guards*
//! (required fields, successful submission) are enforced by the calling
//! step, not here.

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{BusinessData, BusinessDataPatch};
use crate::store::FormStore;

/// One of the six sequential funnel steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    LeadCapture,
    IndustrySelection,
    Opportunities,
    Spending,
    Dashboard,
    Consultation,
}

impl Step {
    pub const COUNT: u8 = 6;

    /// 1-based step number for progress display.
    pub fn number(self) -> u8 {
        match self {
            Step::LeadCapture => 1,
            Step::IndustrySelection => 2,
            Step::Opportunities => 3,
            Step::Spending => 4,
            Step::Dashboard => 5,
            Step::Consultation => 6,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::LeadCapture => "Calculate Your AI Savings",
            Step::IndustrySelection => "What's Your Industry?",
            Step::Opportunities => "AI Integration Opportunities",
            Step::Spending => "Current Spending Analysis",
            Step::Dashboard => "Your AI Savings Dashboard",
            Step::Consultation => "Book Your Free AI Consultation",
        }
    }

    fn next(self) -> Step {
        match self {
            Step::LeadCapture => Step::IndustrySelection,
            Step::IndustrySelection => Step::Opportunities,
            Step::Opportunities => Step::Spending,
            Step::Spending => Step::Dashboard,
            // Step 6 is absorbing: advancing is a no-op.
            Step::Dashboard | Step::Consultation => Step::Consultation,
        }
    }

    fn prev(self) -> Step {
        match self {
            Step::LeadCapture | Step::IndustrySelection => Step::LeadCapture,
            Step::Opportunities => Step::IndustrySelection,
            Step::Spending => Step::Opportunities,
            Step::Dashboard => Step::Spending,
            Step::Consultation => Step::Dashboard,
        }
    }
}

/// Drives one funnel traversal.
#[derive(Debug, Clone)]
pub struct WizardController {
    store: FormStore,
    catalog: Catalog,
    step: Step,
}

impl WizardController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            store: FormStore::new(),
            catalog,
            step: Step::LeadCapture,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn data(&self) -> &BusinessData {
        self.store.data()
    }

    /// Moves to the next step, saturating at the final step.
    pub fn advance(&mut self) {
        let next = self.step.next();
        if next != self.step {
            debug!(from = self.step.number(), to = next.number(), "advance");
        }
        self.step = next;
    }

    /// Moves to the previous step, saturating at the first step.
    pub fn retreat(&mut self) {
        let prev = self.step.prev();
        if prev != self.step {
            debug!(from = self.step.number(), to = prev.number(), "retreat");
        }
        self.step = prev;
    }

    /// Merges a partial update, then re-establishes the derived opportunity
    /// list if the patch touched `industry` or `niche`.
    pub fn update(&mut self, patch: BusinessDataPatch) {
        let resync = patch.touches_niche_inputs();
        self.store.merge(patch);
        if resync {
            self.sync_opportunities();
        }
    }

    /// Recomputes the opportunity list for the current industry/niche pair
    /// and writes it into the store only when it actually differs
    /// (order-sensitively) from the stored list.
    ///
    /// Idempotent by construction: re-running with matching values performs
    /// no write. Returns whether a write occurred.
    pub fn sync_opportunities(&mut self) -> bool {
        let data = self.store.data();
        let expected = self
            .catalog
            .opportunities(&data.industry, &data.niche)
            .to_vec();

        if expected == data.ai_opportunities {
            return false;
        }

        debug!(
            industry = %data.industry,
            niche = %data.niche,
            count = expected.len(),
            "resynced opportunity list"
        );
        self.store.merge(BusinessDataPatch {
            ai_opportunities: Some(expected),
            ..Default::default()
        });
        true
    }

    /// Adds `label` to the consultation areas, or removes it when already
    /// present. The selection keeps toggle order.
    pub fn toggle_consultation_area(&mut self, label: &str) {
        let mut areas = self.store.data().selected_consultation_areas.clone();
        match areas.iter().position(|area| area == label) {
            Some(index) => {
                areas.remove(index);
            }
            None => areas.push(label.to_string()),
        }
        self.store.merge(BusinessDataPatch {
            selected_consultation_areas: Some(areas),
            ..Default::default()
        });
    }
}
