use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use funnel_core::gateway::LeadGateway;
use funnel_data::CatalogLoader;
use funnel_http::{HttpLeadGateway, NullGateway};
use funnel_ui::{FunnelApp, config};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Interactive AI savings funnel.
///
/// Walks a business owner through a six-step wizard: capture contact
/// details, pick an industry niche, review automation opportunities, enter
/// current spending, view the savings dashboard, and book a consultation.
#[derive(Debug, Parser)]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "funnel.toml")]
    config: PathBuf,

    /// Log outbound submissions instead of POSTing them.
    #[arg(long)]
    dry_run: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut cfg = config::load(&cli.config)?;
    if let Ok(api_key) = std::env::var("FUNNEL_API_KEY") {
        cfg.api_key = Some(api_key);
    }

    let catalog = CatalogLoader::shipped()?;
    debug!(
        industries = catalog.industries().len(),
        "catalog loaded"
    );

    let gateway: Box<dyn LeadGateway> = match (&cfg.leads_endpoint, &cfg.booking_endpoint) {
        (Some(leads), Some(bookings)) if !cli.dry_run => Box::new(HttpLeadGateway::new(
            leads.clone(),
            bookings.clone(),
            cfg.api_key.clone(),
        )),
        _ => {
            info!("running against the dry-run gateway; submissions are logged only");
            Box::new(NullGateway)
        }
    };

    let mut app = FunnelApp::new(catalog, gateway, cfg);
    app.run().await
}
