//! Step 4: collect current spending per opportunity and show live savings.
//!
//! Amounts are entered in a weekly or monthly period; the summary projects
//! an annual figure from the chosen entry period (×52 or ×12). The whole
//! updated spending map is merged at once, replacing the previous one.

use anyhow::Result;
use console::style;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;

use funnel_core::engine::{aggregate, compute_savings};
use funnel_core::format::{format_money, format_ratio};
use funnel_core::models::{BusinessDataPatch, EntryPeriod};
use funnel_core::wizard::WizardController;

use crate::app::StepOutcome;
use crate::utils::parse_amount;

pub fn run(wizard: &mut WizardController) -> Result<StepOutcome> {
    println!("Enter how much you currently spend on each area to calculate your AI savings.");
    println!();

    let theme = ColorfulTheme::default();

    if wizard.data().ai_opportunities.is_empty() {
        println!(
            "{}",
            style("No opportunities to price for this specialization.").dim()
        );
        let choice = Select::with_theme(&theme)
            .items(&["View dashboard →", "← Back"])
            .default(0)
            .interact()?;
        return Ok(if choice == 0 {
            StepOutcome::Next
        } else {
            StepOutcome::Back
        });
    }

    let period_index = Select::with_theme(&theme)
        .with_prompt("Enter costs per")
        .items(&["Weekly", "Monthly"])
        .default(1)
        .interact()?;
    let period = EntryPeriod::all()[period_index];

    let opportunities = wizard.data().ai_opportunities.clone();
    let mut spending = wizard.data().spending.clone();

    for opportunity in &opportunities {
        let pct = wizard.catalog().benchmark(opportunity);
        println!();
        println!("{}", style(opportunity).bold());
        println!("  AI can save up to {pct}% on this task.");

        let current = spending.get(opportunity);
        let initial = if current > Decimal::ZERO {
            current.to_string()
        } else {
            String::new()
        };

        let raw: String = Input::with_theme(&theme)
            .with_prompt(format!("  Current {} cost ($)", period.as_str()))
            .with_initial_text(initial)
            .allow_empty(true)
            .validate_with(|input: &String| parse_amount(input).map(|_| ()))
            .interact_text()?;
        let amount = parse_amount(&raw)?;
        spending.set(opportunity, amount);

        if amount > Decimal::ZERO {
            println!(
                "  Potential {} savings: {}",
                period.as_str(),
                style(format_money(compute_savings(amount, pct))).green()
            );
        }
    }

    wizard.update(BusinessDataPatch {
        spending: Some(spending),
        ..Default::default()
    });

    let summary = aggregate(wizard.catalog(), &wizard.data().spending);
    println!();
    println!("{}", style("Live savings summary").bold());
    println!(
        "  Total current spending:  {} /{}",
        format_money(summary.total_spending),
        period.as_str()
    );
    println!(
        "  Potential savings:       {} /{} ({})",
        style(format_money(summary.total_savings)).green(),
        period.as_str(),
        format_ratio(summary.savings_ratio())
    );
    println!(
        "  Annual savings projection: {}",
        style(format_money(summary.total_savings * period.annual_factor())).green()
    );
    println!();

    let choice = Select::with_theme(&theme)
        .items(&["View dashboard →", "Edit amounts", "← Back"])
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => StepOutcome::Next,
        1 => StepOutcome::Stay,
        _ => StepOutcome::Back,
    })
}
