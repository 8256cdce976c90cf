//! Step 1: capture the visitor's business identity and submit the lead.
//!
//! The guard here is twofold: all three fields must be non-blank, and the
//! outbound lead submission must succeed. Nothing is merged into the form
//! state until the submission goes through, so a failed attempt leaves no
//! partial state behind.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use tracing::warn;

use funnel_core::gateway::LeadGateway;
use funnel_core::models::{BusinessDataPatch, LeadPayload};
use funnel_core::wizard::WizardController;

use crate::app::StepOutcome;
use crate::utils::require_non_blank;

pub async fn run(
    wizard: &mut WizardController,
    gateway: &dyn LeadGateway,
) -> Result<StepOutcome> {
    println!("Discover how much money your business can save with AI automation.");
    println!();

    let theme = ColorfulTheme::default();
    let data = wizard.data();

    // Carried across retries so a failed submission never re-asks from
    // scratch.
    let mut business_name = data.business_name.clone();
    let mut owner_name = data.owner_name.clone();
    let mut email = data.email.clone();

    loop {
        business_name = Input::with_theme(&theme)
            .with_prompt("Business name")
            .with_initial_text(&business_name)
            .validate_with(require_non_blank)
            .interact_text()?;
        owner_name = Input::with_theme(&theme)
            .with_prompt("Your full name")
            .with_initial_text(&owner_name)
            .validate_with(require_non_blank)
            .interact_text()?;
        email = Input::with_theme(&theme)
            .with_prompt("Email address")
            .with_initial_text(&email)
            .validate_with(require_non_blank)
            .interact_text()?;

        let payload = LeadPayload {
            business_name: business_name.clone(),
            owner_name: owner_name.clone(),
            email: email.clone(),
        };

        println!("{}", style("Processing...").dim());
        match gateway.submit_lead(&payload).await {
            Ok(()) => {
                wizard.update(BusinessDataPatch {
                    business_name: Some(business_name),
                    owner_name: Some(owner_name),
                    email: Some(email),
                    ..Default::default()
                });
                return Ok(StepOutcome::Next);
            }
            Err(err) => {
                warn!(%err, "lead submission failed");
                println!(
                    "{} {}",
                    style("Submission failed:").red(),
                    style(&err).red()
                );
                let retry = Confirm::with_theme(&theme)
                    .with_prompt("Try again?")
                    .default(true)
                    .interact()?;
                if !retry {
                    return Ok(StepOutcome::Quit);
                }
            }
        }
    }
}
