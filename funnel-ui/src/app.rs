//! Wizard loop: dispatches the current step to its screen and applies the
//! resulting transition through the controller.

use anyhow::Result;
use console::style;
use tracing::debug;

use funnel_core::catalog::Catalog;
use funnel_core::gateway::LeadGateway;
use funnel_core::wizard::{Step, WizardController};

use crate::config::FunnelConfig;
use crate::screens;

/// What a screen wants the wizard to do next.
///
/// Transition guards live in the screens; the controller clamps the actual
/// step movement to [1, 6].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Guard satisfied; move forward.
    Next,
    /// Move back one step.
    Back,
    /// Stay on the step (failed guard, retryable submission failure, edit).
    Stay,
    /// Leave the funnel.
    Quit,
}

/// Top-level application: one wizard traversal against one gateway.
pub struct FunnelApp {
    wizard: WizardController,
    gateway: Box<dyn LeadGateway>,
    config: FunnelConfig,
}

impl FunnelApp {
    pub fn new(catalog: Catalog, gateway: Box<dyn LeadGateway>, config: FunnelConfig) -> Self {
        Self {
            wizard: WizardController::new(catalog),
            gateway,
            config,
        }
    }

    /// Runs the funnel until the visitor finishes or quits.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.print_header();

            let step = self.wizard.step();
            let outcome = match step {
                Step::LeadCapture => {
                    screens::lead_capture::run(&mut self.wizard, self.gateway.as_ref()).await?
                }
                Step::IndustrySelection => screens::industry::run(&mut self.wizard)?,
                Step::Opportunities => screens::opportunities::run(&mut self.wizard)?,
                Step::Spending => screens::spending::run(&mut self.wizard)?,
                Step::Dashboard => screens::dashboard::run(&mut self.wizard).await?,
                Step::Consultation => {
                    screens::consultation::run(
                        &mut self.wizard,
                        self.gateway.as_ref(),
                        &self.config,
                    )
                    .await?
                }
            };

            debug!(step = step.number(), ?outcome, "step finished");
            match outcome {
                StepOutcome::Next => self.wizard.advance(),
                StepOutcome::Back => self.wizard.retreat(),
                StepOutcome::Stay => {}
                StepOutcome::Quit => return Ok(()),
            }
        }
    }

    fn print_header(&self) {
        let step = self.wizard.step();
        println!();
        println!(
            "{}  {}",
            style(format!("Step {} of {}", step.number(), Step::COUNT)).dim(),
            style(step.title()).bold()
        );
        println!("{}", style("─".repeat(64)).dim());
    }
}
