pub mod catalog;
pub mod counter;
pub mod engine;
pub mod format;
pub mod gateway;
pub mod models;
pub mod store;
pub mod wizard;

pub use catalog::{Catalog, DEFAULT_BENCHMARK_PCT};
pub use engine::{
    SavingsLine, SavingsSummary, aggregate, aggregate_selected, compute_savings, convert_period,
    percentage_of_total,
};
pub use gateway::{GatewayError, LeadGateway};
pub use models::*;
pub use store::FormStore;
pub use wizard::{Step, WizardController};
