//! Continuity plan pre-fill CLI
//!
//! Prints the pre-fill bundle for a business as JSON.
//!
//! Usage:
//!   bcp-prefill --industry grocery_store --country JM --parish Kingston --urban
//!   bcp-prefill --industry hotel --country BB --near-coast --locale es
//!   bcp-prefill --industry restaurant --country TT --existing answers.json
//!   bcp-prefill --list-countries
//!   bcp-prefill --list-industries
//!   bcp-prefill --list-rules

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use continuity_planner::risk_engine::AMPLIFICATION_RULES;
use continuity_planner::{
    FormState, HazardRepository, InMemoryCatalog, IndustryRepository, Locale, PlannerConfig,
    PreFillAssembler, PreFillRequest,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bcp-prefill")]
#[command(about = "Pre-fill a small-business continuity plan from industry and location")]
#[command(version)]
struct Cli {
    /// Industry profile id, e.g. grocery_store
    #[arg(short, long)]
    industry: Option<String>,

    /// Country code, e.g. JM
    #[arg(short, long)]
    country: Option<String>,

    /// Parish, state or province
    #[arg(short, long)]
    parish: Option<String>,

    /// Business is near the coast
    #[arg(long)]
    near_coast: bool,

    /// Business is in an urban area
    #[arg(long)]
    urban: bool,

    /// Output language: en, es or fr
    #[arg(short, long)]
    locale: Option<String>,

    /// Date the review schedule counts from (YYYY-MM-DD)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// JSON file with answers to merge into instead of printing the bundle
    #[arg(long)]
    existing: Option<PathBuf>,

    /// Planner configuration file (.toml or .json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// List known country codes and exit
    #[arg(long)]
    list_countries: bool,

    /// List known industry ids and exit
    #[arg(long)]
    list_industries: bool,

    /// Print the location amplification rules as JSON and exit
    #[arg(long)]
    list_rules: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match &cli.config {
        Some(path) => PlannerConfig::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PlannerConfig::default(),
    }
    .with_env_overrides()?;

    let catalog = Arc::new(InMemoryCatalog::caribbean());

    if cli.list_countries {
        for code in catalog.list_countries().await? {
            let regions = catalog.list_sub_regions(&code).await?;
            println!("{}\t{}", code, regions.join(", "));
        }
        return Ok(());
    }

    if cli.list_industries {
        for profile in catalog.list_industries().await? {
            println!("{}\t{}\t{:?}", profile.id, profile.name, profile.category);
        }
        return Ok(());
    }

    if cli.list_rules {
        println!("{}", serde_json::to_string_pretty(AMPLIFICATION_RULES)?);
        return Ok(());
    }

    let (Some(industry), Some(country)) = (cli.industry.as_deref(), cli.country.as_deref()) else {
        bail!("--industry and --country are required (see --help)");
    };

    let mut request = PreFillRequest::new(industry, country)
        .near_coast(cli.near_coast)
        .urban(cli.urban);
    if let Some(parish) = &cli.parish {
        request = request.with_parish(parish);
    }
    if let Some(locale) = &cli.locale {
        request = request.with_locale(locale.parse::<Locale>()?);
    }
    if let Some(date) = cli.as_of {
        request = request.as_of(date);
    }
    if let Some(path) = &cli.existing {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("reading answers from {}", path.display()))?;
        let existing: FormState = serde_json::from_str(&contents)
            .with_context(|| format!("parsing answers in {}", path.display()))?;
        request = request.with_existing(existing);
    }

    let assembler = PreFillAssembler::new(catalog.clone(), catalog, Arc::new(config));

    if cli.existing.is_some() {
        let merged = assembler.generate_and_merge(&request).await?;
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    match assembler.generate(&request).await? {
        Some(bundle) => {
            info!("Bundle {} ready", bundle.id);
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        None => bail!("unknown industry '{industry}' (try --list-industries)"),
    }

    Ok(())
}
