//! Step 6: select consultation areas and book the call.
//!
//! Candidate areas are the positive-spend entries within the *current*
//! opportunity list; spending recorded under a label the active niche no
//! longer offers stays invisible here. The booking payload carries the
//! aggregated monthly savings across all candidates; the confirmation shown
//! to the visitor is scoped to the areas they actually ticked.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, MultiSelect, Select};

use funnel_core::engine::{aggregate_selected, convert_period};
use funnel_core::format::format_money;
use funnel_core::gateway::LeadGateway;
use funnel_core::models::{BookingPayload, BusinessDataPatch, Period};
use funnel_core::wizard::WizardController;
use tracing::warn;

use crate::app::StepOutcome;
use crate::config::FunnelConfig;

pub async fn run(
    wizard: &mut WizardController,
    gateway: &dyn LeadGateway,
    config: &FunnelConfig,
) -> Result<StepOutcome> {
    println!("Pick the areas you'd like to cover in your free consultation.");
    println!();

    let theme = ColorfulTheme::default();
    let summary = aggregate_selected(
        wizard.catalog(),
        &wizard.data().spending,
        &wizard.data().ai_opportunities,
    );

    if summary.lines.is_empty() {
        println!(
            "{}",
            style("Enter some spending first so we know what to talk about.").dim()
        );
        let _ = Select::with_theme(&theme)
            .items(&["← Back"])
            .default(0)
            .interact()?;
        return Ok(StepOutcome::Back);
    }

    let items: Vec<String> = summary
        .lines
        .iter()
        .map(|line| {
            format!(
                "{} (save {}/mo of {}/mo spent)",
                line.opportunity,
                format_money(line.savings),
                format_money(line.spending)
            )
        })
        .collect();
    let defaults: Vec<bool> = summary
        .lines
        .iter()
        .map(|line| {
            wizard
                .data()
                .selected_consultation_areas
                .contains(&line.opportunity)
        })
        .collect();

    let picked = MultiSelect::with_theme(&theme)
        .with_prompt("Consultation areas (space to toggle, enter to confirm)")
        .items(&items)
        .defaults(&defaults)
        .interact()?;

    if picked.is_empty() {
        println!(
            "{}",
            style("Select at least one area to book a consultation.").red()
        );
        let back = Confirm::with_theme(&theme)
            .with_prompt("Go back to the dashboard instead?")
            .default(false)
            .interact()?;
        return Ok(if back {
            StepOutcome::Back
        } else {
            StepOutcome::Stay
        });
    }

    let selected: Vec<String> = picked
        .iter()
        .map(|&index| summary.lines[index].opportunity.clone())
        .collect();
    wizard.update(BusinessDataPatch {
        selected_consultation_areas: Some(selected.clone()),
        ..Default::default()
    });

    let data = wizard.data();
    let payload = BookingPayload {
        business_name: data.business_name.clone(),
        owner_name: data.owner_name.clone(),
        email: data.email.clone(),
        selected_areas: selected.clone(),
        total_potential_savings: summary.total_savings,
    };

    println!("{}", style("Booking your consultation...").dim());
    if let Err(err) = gateway.book_consultation(&payload).await {
        warn!(%err, "consultation booking failed");
        println!("{} {}", style("Booking failed:").red(), style(&err).red());
        let retry = Confirm::with_theme(&theme)
            .with_prompt("Try again?")
            .default(true)
            .interact()?;
        return Ok(if retry {
            StepOutcome::Stay
        } else {
            StepOutcome::Quit
        });
    }

    let selected_summary = aggregate_selected(wizard.catalog(), &wizard.data().spending, &selected);
    let monthly = selected_summary.total_savings;
    let annual = convert_period(monthly, Period::Yearly);

    println!();
    println!("{}", style("You're booked!").green().bold());
    println!(
        "  {} consultation area{} covering {} /mo ({} /yr) in potential savings.",
        selected.len(),
        if selected.len() == 1 { "" } else { "s" },
        style(format_money(monthly)).green(),
        style(format_money(annual)).green()
    );
    println!("  Schedule your call: {}", style(&config.calendar_url).cyan());
    println!();

    Ok(StepOutcome::Quit)
}
