pub mod app;
pub mod config;
pub mod screens;
pub mod utils;

pub use app::{FunnelApp, StepOutcome};
pub use config::FunnelConfig;
