//! Step 5: the savings dashboard.
//!
//! The headline figure animates from zero to the period-converted total
//! each time the period changes. The breakdown below it is always the
//! monthly view, sorted by savings descending.

use std::io::Write as _;

use anyhow::Result;
use console::style;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use rust_decimal::prelude::ToPrimitive;

use funnel_core::counter::CountUp;
use funnel_core::engine::{aggregate, convert_period, percentage_of_total};
use funnel_core::format::{format_money, format_ratio};
use funnel_core::models::Period;
use funnel_core::wizard::WizardController;

use crate::app::StepOutcome;
use crate::utils::percentage_bar;

pub async fn run(wizard: &mut WizardController) -> Result<StepOutcome> {
    println!(
        "{}, here's how much AI automation can save your business:",
        wizard.data().business_name
    );
    println!();

    let theme = ColorfulTheme::default();
    let summary = aggregate(wizard.catalog(), &wizard.data().spending);
    let mut period = Period::default();
    let mut counter = CountUp::new();

    loop {
        let target = convert_period(summary.total_savings, period);
        animate_headline(&mut counter, target, period).await?;
        println!();

        if summary.lines.is_empty() {
            println!(
                "{}",
                style("No spending entered yet, so there's nothing to break down.").dim()
            );
        } else {
            println!("{}", style("Savings breakdown (monthly)").bold());
            for line in &summary.lines {
                let share = percentage_of_total(line.savings, summary.total_savings)
                    .round()
                    .to_u32()
                    .unwrap_or(0);
                println!(
                    "  {}  {}",
                    percentage_bar(share),
                    style(&line.opportunity).bold()
                );
                println!(
                    "     save {} of {} spent ({}%)",
                    style(format_money(line.savings)).green(),
                    format_money(line.spending),
                    line.percentage
                );
            }
            println!();
            println!(
                "  Annual savings:   {}",
                style(format_money(convert_period(
                    summary.total_savings,
                    Period::Yearly
                )))
                .green()
            );
            println!("  Areas optimized:  {}", summary.lines.len());
            println!(
                "  Cost reduction:   {}",
                format_ratio(summary.savings_ratio())
            );
        }
        println!();

        let period_items: Vec<String> = Period::all()
            .iter()
            .map(|p| format!("Show {}", p.label()))
            .collect();
        let mut items = period_items;
        items.push("Book Free Consultation →".to_string());
        items.push("← Back".to_string());

        let choice = Select::with_theme(&theme)
            .items(&items)
            .default(Period::all().len())
            .interact()?;

        if choice < Period::all().len() {
            period = Period::all()[choice];
            continue;
        }
        if choice == Period::all().len() {
            return Ok(StepOutcome::Next);
        }
        return Ok(StepOutcome::Back);
    }
}

/// Counts the headline figure up from zero in place on one terminal line.
async fn animate_headline(
    counter: &mut CountUp,
    target: rust_decimal::Decimal,
    period: Period,
) -> Result<()> {
    let generation = counter.retarget(target);
    let mut stdout = std::io::stdout();

    while let Some(value) = counter.tick(generation) {
        write!(
            stdout,
            "\r  {} {}",
            style(format_money(value)).green().bold(),
            style(format!("{} savings", period.label())).dim()
        )?;
        stdout.flush()?;
        tokio::time::sleep(CountUp::tick_interval()).await;
    }
    writeln!(stdout)?;
    Ok(())
}
