//! OpenFirme Command Line Tool
//!
//! Provides one subcommand per API operation:
//! - firma: full company record by CUI
//! - bilant: balance-sheet filings by CUI
//! - restante: outstanding tax obligations by CUI
//! - mof: official-gazette publications by CUI
//! - search: filtered registry search
//! - free-firma / free-usage: free-tier endpoints
//!
//! Results are printed as pretty JSON. Set `RUST_LOG=debug` to see the
//! transport-level events.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use openfirme_client::{ClientConfig, OpenFirmeClient, SearchCriteria};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "openfirme")]
#[command(version)]
#[command(about = "Query the OpenFirme company registry from the command line")]
struct Cli {
    /// API key; falls back to the OPENFIRME_API_KEY environment variable
    #[arg(long, env = "OPENFIRME_API_KEY", global = true)]
    api_key: Option<String>,

    /// Request sandbox fixture data (standard-tier endpoints only)
    #[arg(long, global = true)]
    sandbox: bool,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up a company by CUI
    Firma {
        /// Fiscal registration code (RO prefix and punctuation tolerated)
        #[arg(value_name = "CUI")]
        cui: String,
    },

    /// Balance-sheet filings for a company, one entry per year
    Bilant {
        #[arg(value_name = "CUI")]
        cui: String,
    },

    /// Outstanding tax obligations for a company
    Restante {
        #[arg(value_name = "CUI")]
        cui: String,
    },

    /// Official-gazette publications referencing a company
    Mof {
        #[arg(value_name = "CUI")]
        cui: String,
    },

    /// Search the registry with optional filters
    Search {
        /// Free-text term matched against company names
        #[arg(long)]
        q: Option<String>,

        /// County code (e.g. B, CJ)
        #[arg(long)]
        judet: Option<String>,

        #[arg(long)]
        localitate: Option<String>,

        /// CAEN activity-classification code
        #[arg(long)]
        caen: Option<String>,

        /// Registration status
        #[arg(long)]
        stare: Option<String>,

        /// Exact registration date (YYYY-MM-DD)
        #[arg(long)]
        data: Option<NaiveDate>,

        #[arg(long)]
        data_start: Option<NaiveDate>,

        #[arg(long)]
        data_end: Option<NaiveDate>,

        /// VAT-payer filter (true/false)
        #[arg(long)]
        tva: Option<bool>,

        /// Has-phone-number filter (true/false)
        #[arg(long)]
        telefon: Option<bool>,

        #[arg(long)]
        page: Option<u32>,
    },

    /// Look up a company via the free-tier endpoint
    FreeFirma {
        #[arg(value_name = "CUI")]
        cui: String,
    },

    /// Show free-tier quota usage for the configured key
    FreeUsage,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    match cli.command {
        Commands::Firma { cui } => print_json(&client.company(&cui).await?),
        Commands::Bilant { cui } => print_json(&client.balance_sheets(&cui).await?),
        Commands::Restante { cui } => print_json(&client.tax_debts(&cui).await?),
        Commands::Mof { cui } => print_json(&client.publications(&cui).await?),
        Commands::Search {
            q,
            judet,
            localitate,
            caen,
            stare,
            data,
            data_start,
            data_end,
            tva,
            telefon,
            page,
        } => {
            let criteria = SearchCriteria {
                q,
                judet,
                localitate,
                caen,
                stare,
                data,
                data_start,
                data_end,
                tva,
                telefon,
                page,
            };
            print_json(&client.search(&criteria).await?)
        }
        Commands::FreeFirma { cui } => print_json(&client.free_company(&cui).await?),
        Commands::FreeUsage => print_json(&client.free_usage().await?),
    }
}

fn build_client(cli: &Cli) -> Result<OpenFirmeClient> {
    let api_key = cli
        .api_key
        .clone()
        .context("An API key is required (--api-key or OPENFIRME_API_KEY)")?;

    let mut config = ClientConfig::new(api_key).with_sandbox(cli.sandbox);
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }

    OpenFirmeClient::new(config).context("Failed to construct client")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered =
        serde_json::to_string_pretty(value).context("Failed to render result as JSON")?;
    println!("{rendered}");
    Ok(())
}
