//! Step 3: present the automation opportunities for the chosen niche.
//!
//! Purely informational; the list itself is maintained by the controller's
//! opportunity sync.

use anyhow::Result;
use console::style;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;

use funnel_core::wizard::WizardController;

use crate::app::StepOutcome;

pub fn run(wizard: &mut WizardController) -> Result<StepOutcome> {
    let data = wizard.data();
    println!(
        "Here are the key areas where AI can transform your {} business:",
        data.niche
    );
    println!();

    if data.ai_opportunities.is_empty() {
        println!(
            "{}",
            style("We don't have a curated opportunity list for this specialization yet.").dim()
        );
    }

    for (index, opportunity) in data.ai_opportunities.iter().enumerate() {
        let pct = wizard.catalog().benchmark(opportunity);
        println!(
            "  {} {}",
            style(format!("{}.", index + 1)).bold(),
            style(opportunity).bold()
        );
        println!(
            "     AI can save up to {pct}% on this task based on industry research."
        );
    }
    println!();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .items(&["Calculate savings →", "← Back"])
        .default(0)
        .interact()?;

    match choice {
        0 => Ok(StepOutcome::Next),
        _ => Ok(StepOutcome::Back),
    }
}
