//! Step 2: pick an industry, then a specialization within it.
//!
//! Advancing requires both to be set; the controller's opportunity sync
//! repopulates the derived list on every selection change. Picking a new
//! industry clears the niche.

use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use funnel_core::models::BusinessDataPatch;
use funnel_core::wizard::WizardController;

use crate::app::StepOutcome;

pub fn run(wizard: &mut WizardController) -> Result<StepOutcome> {
    println!("Help us customize your AI savings calculation.");
    println!();

    let theme = ColorfulTheme::default();

    loop {
        if wizard.data().industry.is_empty() {
            let industries: Vec<String> = wizard
                .catalog()
                .industries()
                .iter()
                .map(|entry| format!("{} ({} specializations)", entry.name, entry.niches.len()))
                .collect();
            let names: Vec<String> = wizard
                .catalog()
                .industries()
                .iter()
                .map(|entry| entry.name.clone())
                .collect();

            let mut items = industries;
            items.push("← Back".to_string());

            let choice = Select::with_theme(&theme)
                .with_prompt("Select your industry")
                .items(&items)
                .default(0)
                .interact()?;

            if choice == items.len() - 1 {
                return Ok(StepOutcome::Back);
            }
            wizard.update(BusinessDataPatch {
                industry: Some(names[choice].clone()),
                niche: Some(String::new()),
                ..Default::default()
            });
        }

        let industry = wizard.data().industry.clone();
        match pick_niche(wizard, &theme, &industry)? {
            NicheChoice::Selected(niche) => {
                wizard.update(BusinessDataPatch {
                    niche: Some(niche),
                    ..Default::default()
                });
                // Guard: both industry and niche set.
                if wizard.data().has_niche() {
                    return Ok(StepOutcome::Next);
                }
            }
            NicheChoice::ChangeIndustry => {
                wizard.update(BusinessDataPatch {
                    industry: Some(String::new()),
                    niche: Some(String::new()),
                    ..Default::default()
                });
            }
            NicheChoice::Back => return Ok(StepOutcome::Back),
        }
    }
}

enum NicheChoice {
    Selected(String),
    ChangeIndustry,
    Back,
}

fn pick_niche(
    wizard: &WizardController,
    theme: &ColorfulTheme,
    industry: &str,
) -> Result<NicheChoice> {
    loop {
        let search: String = Input::with_theme(theme)
            .with_prompt(format!(
                "Search specializations in {industry} (blank to list all)"
            ))
            .allow_empty(true)
            .interact_text()?;

        let needle = search.to_lowercase();
        let niches: Vec<String> = wizard
            .catalog()
            .niches(industry)
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .map(|entry| entry.name.clone())
            .collect();

        if niches.is_empty() {
            println!("No specializations match '{search}'.");
            continue;
        }

        let mut items = niches.clone();
        items.push("Change industry".to_string());
        items.push("← Back".to_string());

        let choice = Select::with_theme(theme)
            .with_prompt(format!("Choose your specialization in {industry}"))
            .items(&items)
            .default(0)
            .interact()?;

        if choice < niches.len() {
            return Ok(NicheChoice::Selected(niches[choice].clone()));
        }
        if choice == niches.len() {
            return Ok(NicheChoice::ChangeIndustry);
        }
        return Ok(NicheChoice::Back);
    }
}
