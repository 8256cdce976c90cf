//! CSV loader for catalog data.
//!
//! ## CSV formats
//!
//! Row order is significant: it defines the display order of industries,
//! niches and opportunity labels. Headers are matched by name and are
//! case-sensitive.
//!
//! `niches.csv` is the industry/niche tree. Niches without a curated
//! opportunity list still appear here (they resolve to an empty list).
//!
//! ```csv
//! industry,niche
//! Healthcare,General Practice
//! Healthcare,Dental
//! ```
//!
//! `opportunities.csv` holds the ordered opportunity labels per niche. Every row
//! must reference a niche declared in `niches.csv`.
//!
//! ```csv
//! industry,niche,opportunity
//! Healthcare,General Practice,Patient Appointment Scheduling
//! ```
//!
//! `benchmarks.csv` maps each opportunity label to a savings percentage,
//! an integer in [0, 100]. Duplicate labels are rejected. Labels absent
//! from this file fall back to the catalog's 60% default at lookup time.
//!
//! ```csv
//! opportunity,savings_pct
//! Patient Appointment Scheduling,80
//! ```

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;
use tracing::info;

use funnel_core::catalog::{Catalog, IndustryEntry, NicheEntry};
use thiserror::Error;

/// The catalog data shipped with the funnel.
pub const NICHES_CSV: &str = include_str!("../data/niches.csv");
pub const OPPORTUNITIES_CSV: &str = include_str!("../data/opportunities.csv");
pub const BENCHMARKS_CSV: &str = include_str!("../data/benchmarks.csv");

/// Errors that can occur when loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("savings percentage for '{opportunity}' must be in [0, 100], got {savings_pct}")]
    InvalidPercentage { opportunity: String, savings_pct: u32 },

    #[error("opportunity row references undeclared niche '{industry}' / '{niche}'")]
    UnknownNiche { industry: String, niche: String },

    #[error("duplicate benchmark entry for '{0}'")]
    DuplicateBenchmark(String),
}

impl From<csv::Error> for CatalogLoaderError {
    fn from(err: csv::Error) -> Self {
        CatalogLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from the niches CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NicheRecord {
    pub industry: String,
    pub niche: String,
}

/// A single record from the opportunities CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OpportunityRecord {
    pub industry: String,
    pub niche: String,
    pub opportunity: String,
}

/// A single record from the benchmarks CSV file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BenchmarkRecord {
    pub opportunity: String,
    pub savings_pct: u32,
}

/// Loader for catalog data from CSV files.
///
/// Parsing and assembly are separate so callers can validate records from
/// any `Read` source before building the catalog.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse niche records from a CSV reader.
    pub fn parse_niches<R: Read>(reader: R) -> Result<Vec<NicheRecord>, CatalogLoaderError> {
        Self::parse(reader)
    }

    /// Parse opportunity records from a CSV reader.
    pub fn parse_opportunities<R: Read>(
        reader: R,
    ) -> Result<Vec<OpportunityRecord>, CatalogLoaderError> {
        Self::parse(reader)
    }

    /// Parse benchmark records from a CSV reader.
    pub fn parse_benchmarks<R: Read>(
        reader: R,
    ) -> Result<Vec<BenchmarkRecord>, CatalogLoaderError> {
        Self::parse(reader)
    }

    fn parse<R: Read, T: for<'de> Deserialize<'de>>(
        reader: R,
    ) -> Result<Vec<T>, CatalogLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            records.push(result?);
        }

        Ok(records)
    }

    /// Assemble a [`Catalog`] from parsed records.
    ///
    /// Industries and niches keep first-appearance order from the niche
    /// records; opportunity labels keep row order within their niche.
    pub fn build(
        niches: &[NicheRecord],
        opportunities: &[OpportunityRecord],
        benchmarks: &[BenchmarkRecord],
    ) -> Result<Catalog, CatalogLoaderError> {
        let mut industries: Vec<IndustryEntry> = Vec::new();

        for record in niches {
            let index = match industries
                .iter()
                .position(|entry| entry.name == record.industry)
            {
                Some(index) => index,
                None => {
                    industries.push(IndustryEntry {
                        name: record.industry.clone(),
                        niches: Vec::new(),
                    });
                    industries.len() - 1
                }
            };
            let industry = &mut industries[index];
            if !industry.niches.iter().any(|entry| entry.name == record.niche) {
                industry.niches.push(NicheEntry {
                    name: record.niche.clone(),
                    opportunities: Vec::new(),
                });
            }
        }

        for record in opportunities {
            let niche = industries
                .iter_mut()
                .find(|entry| entry.name == record.industry)
                .and_then(|entry| {
                    entry
                        .niches
                        .iter_mut()
                        .find(|niche| niche.name == record.niche)
                })
                .ok_or_else(|| CatalogLoaderError::UnknownNiche {
                    industry: record.industry.clone(),
                    niche: record.niche.clone(),
                })?;
            niche.opportunities.push(record.opportunity.clone());
        }

        let mut benchmark_map: HashMap<String, u32> = HashMap::new();
        for record in benchmarks {
            if record.savings_pct > 100 {
                return Err(CatalogLoaderError::InvalidPercentage {
                    opportunity: record.opportunity.clone(),
                    savings_pct: record.savings_pct,
                });
            }
            if benchmark_map
                .insert(record.opportunity.clone(), record.savings_pct)
                .is_some()
            {
                return Err(CatalogLoaderError::DuplicateBenchmark(
                    record.opportunity.clone(),
                ));
            }
        }

        info!(
            industries = industries.len(),
            benchmarks = benchmark_map.len(),
            "assembled catalog from CSV records"
        );

        Ok(Catalog::new(industries, benchmark_map))
    }

    /// Load the catalog shipped in `data/`.
    pub fn shipped() -> Result<Catalog, CatalogLoaderError> {
        let niches = Self::parse_niches(NICHES_CSV.as_bytes())?;
        let opportunities = Self::parse_opportunities(OPPORTUNITIES_CSV.as_bytes())?;
        let benchmarks = Self::parse_benchmarks(BENCHMARKS_CSV.as_bytes())?;
        Self::build(&niches, &opportunities, &benchmarks)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const NICHES: &str = "industry,niche\n\
                          Healthcare,General Practice\n\
                          Healthcare,Dental\n\
                          Legal,Family Law\n";

    const OPPORTUNITIES: &str = "industry,niche,opportunity\n\
                                 Healthcare,General Practice,Patient Appointment Scheduling\n\
                                 Healthcare,General Practice,Insurance Verification\n";

    const BENCHMARKS: &str = "opportunity,savings_pct\n\
                              Patient Appointment Scheduling,80\n\
                              Insurance Verification,70\n";

    fn build(
        niches: &str,
        opportunities: &str,
        benchmarks: &str,
    ) -> Result<Catalog, CatalogLoaderError> {
        CatalogLoader::build(
            &CatalogLoader::parse_niches(niches.as_bytes())?,
            &CatalogLoader::parse_opportunities(opportunities.as_bytes())?,
            &CatalogLoader::parse_benchmarks(benchmarks.as_bytes())?,
        )
    }

    #[test]
    fn builds_catalog_preserving_row_order() {
        let catalog = build(NICHES, OPPORTUNITIES, BENCHMARKS).unwrap();

        let industries: Vec<&str> = catalog
            .industries()
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(industries, vec!["Healthcare", "Legal"]);

        assert_eq!(
            catalog.opportunities("Healthcare", "General Practice"),
            &["Patient Appointment Scheduling", "Insurance Verification"]
        );
        assert_eq!(catalog.benchmark("Insurance Verification"), 70);
    }

    #[test]
    fn niche_without_opportunities_resolves_to_empty_list() {
        let catalog = build(NICHES, OPPORTUNITIES, BENCHMARKS).unwrap();

        assert_eq!(
            catalog.opportunities("Legal", "Family Law"),
            &[] as &[String]
        );
    }

    #[test]
    fn opportunity_for_undeclared_niche_is_rejected() {
        let opportunities = "industry,niche,opportunity\n\
                             Retail,E-commerce,Customer Service Chatbots\n";

        let err = build(NICHES, opportunities, BENCHMARKS).unwrap_err();

        assert!(matches!(err, CatalogLoaderError::UnknownNiche { .. }));
    }

    #[test]
    fn out_of_range_percentage_is_rejected() {
        let benchmarks = "opportunity,savings_pct\n\
                          Patient Appointment Scheduling,101\n";

        let err = build(NICHES, OPPORTUNITIES, benchmarks).unwrap_err();

        assert!(matches!(
            err,
            CatalogLoaderError::InvalidPercentage { savings_pct: 101, .. }
        ));
    }

    #[test]
    fn duplicate_benchmark_is_rejected() {
        let benchmarks = "opportunity,savings_pct\n\
                          Patient Appointment Scheduling,80\n\
                          Patient Appointment Scheduling,75\n";

        let err = build(NICHES, OPPORTUNITIES, benchmarks).unwrap_err();

        assert!(matches!(err, CatalogLoaderError::DuplicateBenchmark(_)));
    }

    #[test]
    fn malformed_csv_is_a_parse_error() {
        let err = CatalogLoader::parse_benchmarks("opportunity,savings_pct\nA,eighty\n".as_bytes())
            .unwrap_err();

        assert!(matches!(err, CatalogLoaderError::CsvParse(_)));
    }
}
