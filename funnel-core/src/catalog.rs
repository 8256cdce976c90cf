//! Static automation catalog: industry → niche → opportunities, and
//! opportunity → benchmark savings percentage.
//!
//! The catalog is loaded once at process start and never mutated. Absence is
//! represented by empty results or the default percentage, never by an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Benchmark percentage applied when an opportunity label has no entry.
///
/// This silent fallback is part of the funnel's observable behavior; the
/// value must stay at 60 for compatibility with previously computed figures.
pub const DEFAULT_BENCHMARK_PCT: u32 = 60;

/// A niche and its ordered automation-opportunity labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicheEntry {
    pub name: String,
    pub opportunities: Vec<String>,
}

/// An industry and its ordered niches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryEntry {
    pub name: String,
    pub niches: Vec<NicheEntry>,
}

/// Read-only lookup tables driving the funnel.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    industries: Vec<IndustryEntry>,
    benchmarks: HashMap<String, u32>,
}

impl Catalog {
    pub fn new(industries: Vec<IndustryEntry>, benchmarks: HashMap<String, u32>) -> Self {
        Self {
            industries,
            benchmarks,
        }
    }

    /// Industries in display order.
    pub fn industries(&self) -> &[IndustryEntry] {
        &self.industries
    }

    /// Niches for `industry` in display order, empty when unknown.
    pub fn niches(&self, industry: &str) -> &[NicheEntry] {
        self.industries
            .iter()
            .find(|entry| entry.name == industry)
            .map(|entry| entry.niches.as_slice())
            .unwrap_or(&[])
    }

    /// Ordered opportunity labels for an industry/niche pair.
    ///
    /// Returns an empty slice when the pair does not resolve to a catalog
    /// entry; an unknown pair is not an error.
    pub fn opportunities(&self, industry: &str, niche: &str) -> &[String] {
        self.niches(industry)
            .iter()
            .find(|entry| entry.name == niche)
            .map(|entry| entry.opportunities.as_slice())
            .unwrap_or(&[])
    }

    /// Benchmark savings percentage for an opportunity label, in [0, 100].
    ///
    /// Unknown labels fall back to [`DEFAULT_BENCHMARK_PCT`]. The fallback is
    /// logged but otherwise indistinguishable from a real entry.
    pub fn benchmark(&self, label: &str) -> u32 {
        match self.benchmarks.get(label) {
            Some(pct) => *pct,
            None => {
                warn!(
                    label,
                    default = DEFAULT_BENCHMARK_PCT,
                    "no benchmark for opportunity; using default percentage"
                );
                DEFAULT_BENCHMARK_PCT
            }
        }
    }

    /// The built-in catalog shipped with the funnel.
    ///
    /// Data mirrors the published industry-research benchmarks; niches
    /// without a curated opportunity list resolve to an empty list.
    pub fn builtin() -> Self {
        let industries = BUILTIN_INDUSTRIES
            .iter()
            .map(|(industry, niches)| IndustryEntry {
                name: (*industry).to_string(),
                niches: niches
                    .iter()
                    .map(|niche| NicheEntry {
                        name: (*niche).to_string(),
                        opportunities: BUILTIN_OPPORTUNITIES
                            .iter()
                            .find(|(ind, nich, _)| ind == industry && nich == niche)
                            .map(|(_, _, labels)| {
                                labels.iter().map(|label| (*label).to_string()).collect()
                            })
                            .unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        let benchmarks = BUILTIN_BENCHMARKS
            .iter()
            .map(|(label, pct)| ((*label).to_string(), *pct))
            .collect();

        Self::new(industries, benchmarks)
    }
}

const BUILTIN_INDUSTRIES: &[(&str, &[&str])] = &[
    (
        "Healthcare",
        &[
            "General Practice",
            "Dental",
            "Mental Health",
            "Physical Therapy",
            "Veterinary",
        ],
    ),
    (
        "Real Estate",
        &[
            "Residential Sales",
            "Commercial",
            "Property Management",
            "Real Estate Investment",
        ],
    ),
    (
        "Legal",
        &[
            "Personal Injury",
            "Family Law",
            "Corporate Law",
            "Criminal Defense",
            "Immigration",
        ],
    ),
    (
        "Retail",
        &[
            "E-commerce",
            "Fashion",
            "Electronics",
            "Home & Garden",
            "Automotive",
        ],
    ),
    (
        "Manufacturing",
        &[
            "Food Processing",
            "Automotive Parts",
            "Electronics",
            "Textiles",
            "Pharmaceuticals",
        ],
    ),
    (
        "Professional Services",
        &[
            "Accounting",
            "Consulting",
            "Marketing Agency",
            "IT Services",
            "Architecture",
        ],
    ),
];

const BUILTIN_OPPORTUNITIES: &[(&str, &str, &[&str])] = &[
    (
        "Real Estate",
        "Residential Sales",
        &[
            "Lead Qualification & Scoring",
            "Automated Appointment Scheduling",
            "CRM Data Updates & Management",
            "Email Marketing Automation",
            "Client Follow-up Sequences",
            "Document & Contract Review",
        ],
    ),
    (
        "Real Estate",
        "Commercial",
        &[
            "Market Analysis & Reporting",
            "Property Valuation Automation",
            "Client Communication Management",
            "Deal Pipeline Tracking",
            "Financial Analysis Automation",
            "Lease Agreement Processing",
        ],
    ),
    (
        "Legal",
        "Personal Injury",
        &[
            "Case Research & Analysis",
            "Document Drafting & Review",
            "Client Intake Automation",
            "Appointment Scheduling",
            "Invoice & Billing Management",
            "Client Communication Follow-up",
        ],
    ),
    (
        "Legal",
        "Family Law",
        &[
            "Document Preparation",
            "Case Timeline Management",
            "Client Consultation Scheduling",
            "Court Filing Automation",
            "Client Progress Updates",
            "Legal Research Assistance",
        ],
    ),
    (
        "Healthcare",
        "General Practice",
        &[
            "Patient Appointment Scheduling",
            "Medical Record Management",
            "Insurance Verification",
            "Prescription Management",
            "Patient Follow-up Communications",
            "Billing & Claims Processing",
        ],
    ),
    (
        "Healthcare",
        "Dental",
        &[
            "Appointment Scheduling & Reminders",
            "Treatment Plan Creation",
            "Insurance Claims Processing",
            "Patient Communication",
            "Inventory Management",
            "Follow-up Care Coordination",
        ],
    ),
    (
        "Retail",
        "E-commerce",
        &[
            "Customer Service Chatbots",
            "Inventory Management",
            "Order Processing Automation",
            "Personalized Marketing",
            "Returns & Refunds Processing",
            "Product Recommendation Engine",
        ],
    ),
    (
        "Manufacturing",
        "Food Processing",
        &[
            "Quality Control Monitoring",
            "Supply Chain Management",
            "Production Scheduling",
            "Inventory Optimization",
            "Compliance Reporting",
            "Equipment Maintenance Scheduling",
        ],
    ),
    (
        "Professional Services",
        "Accounting",
        &[
            "Data Entry Automation",
            "Invoice Processing",
            "Tax Preparation Assistance",
            "Client Communication",
            "Report Generation",
            "Compliance Monitoring",
        ],
    ),
];

const BUILTIN_BENCHMARKS: &[(&str, u32)] = &[
    ("Lead Qualification & Scoring", 65),
    ("Automated Appointment Scheduling", 80),
    ("CRM Data Updates & Management", 70),
    ("Email Marketing Automation", 75),
    ("Client Follow-up Sequences", 85),
    ("Document & Contract Review", 60),
    ("Case Research & Analysis", 55),
    ("Document Drafting & Review", 50),
    ("Client Intake Automation", 70),
    ("Appointment Scheduling", 80),
    ("Invoice & Billing Management", 75),
    ("Client Communication Follow-up", 85),
    ("Patient Appointment Scheduling", 80),
    ("Medical Record Management", 65),
    ("Insurance Verification", 70),
    ("Prescription Management", 60),
    ("Patient Follow-up Communications", 85),
    ("Billing & Claims Processing", 75),
    ("Customer Service Chatbots", 70),
    ("Inventory Management", 60),
    ("Order Processing Automation", 75),
    ("Personalized Marketing", 65),
    ("Returns & Refunds Processing", 80),
    ("Product Recommendation Engine", 55),
    ("Quality Control Monitoring", 65),
    ("Supply Chain Management", 50),
    ("Production Scheduling", 60),
    ("Inventory Optimization", 55),
    ("Compliance Reporting", 70),
    ("Equipment Maintenance Scheduling", 65),
    ("Data Entry Automation", 85),
    ("Invoice Processing", 80),
    ("Tax Preparation Assistance", 60),
    ("Client Communication", 75),
    ("Report Generation", 70),
    ("Compliance Monitoring", 65),
];
