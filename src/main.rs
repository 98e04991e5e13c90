use analytics::{AnalysisOptions, AnalyticsEngine, SellerReport};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use configuration::Config;
use core_types::SalesData;
use std::path::{Path, PathBuf};
use strategies::{create_bonus_strategy, create_revenue_strategy};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the salesrank application.
fn main() -> Result<()> {
    // A missing .env file is fine; it only carries optional overrides.
    dotenvy::dotenv().ok();

    // Logs go to stderr so `--format json` output on stdout stays machine-readable.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Parse command-line arguments
    let cli = Cli::parse();

    // Execute the appropriate command
    match cli.command {
        Commands::Analyze(args) => handle_analyze(args),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Ranks sellers by profit and computes their bonuses from a batch of purchase records.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a JSON sales document and print the seller ranking.
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
struct AnalyzeArgs {
    /// Path to the JSON document holding `sellers`, `products` and `purchase_records`.
    #[arg(long)]
    input: PathBuf,

    /// Optional TOML configuration file. Built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How to print the report. JSON prints monetary values as numbers.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// ==============================================================================
// Analyze Command Logic
// ==============================================================================

/// Handles the orchestration of one analysis run.
fn handle_analyze(args: AnalyzeArgs) -> Result<()> {
    let config = configuration::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;
    tracing::info!(
        revenue = ?config.strategies.revenue,
        bonus = ?config.strategies.bonus,
        "Configuration loaded."
    );

    let data = read_sales_data(&args.input)?;

    let options = build_options(&config)?;
    let engine = AnalyticsEngine::new().with_top_products_limit(config.report.top_products_limit);
    let reports = engine
        .analyze(data.as_ref(), &options)
        .context("Sales analysis failed")?;

    match args.format {
        OutputFormat::Table => println!("{}", render_table(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }

    Ok(())
}

/// Reads the input document. A JSON `null` yields `None`, which the engine rejects.
fn read_sales_data(path: &Path) -> Result<Option<SalesData>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;
    let data = serde_json::from_str::<Option<SalesData>>(&raw)
        .with_context(|| format!("Failed to parse sales data from {}", path.display()))?;
    Ok(data)
}

fn build_options(config: &Config) -> Result<AnalysisOptions> {
    let revenue = create_revenue_strategy(config.strategies.revenue);
    let bonus = create_bonus_strategy(config.strategies.bonus, config)
        .context("Failed to build bonus strategy")?;
    Ok(AnalysisOptions::from_boxed(revenue, bonus))
}

fn render_table(reports: &[SellerReport]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Rank", "Seller", "Name", "Sales", "Revenue", "Profit", "Bonus", "Top product",
    ]);

    for (rank, report) in reports.iter().enumerate() {
        let top_product = report
            .top_products
            .first()
            .map(|p| format!("{} ({})", p.sku, p.quantity))
            .unwrap_or_else(|| "-".to_string());

        table.add_row(vec![
            (rank + 1).to_string(),
            report.seller_id.clone(),
            report.name.clone(),
            report.sales_count.to_string(),
            report.revenue.to_string(),
            report.profit.to_string(),
            report.bonus.to_string(),
            top_product,
        ]);
    }

    table
}
