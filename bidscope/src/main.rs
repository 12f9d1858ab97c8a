mod args;

use anyhow::{Context, Result};
use args::Args;
use bidscope_clean::clean_sales;
use bidscope_export::{save_sales_csv, MarketReport, SalesTable};
use bidscope_source::{search_url, FileSource, RecordSource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run(args: &Args) -> Result<String> {
    let url = search_url(&args.keyword)?;
    info!(%url, "sold listings search");

    let source = match args.format {
        Some(format) => FileSource::with_format(&args.input, format),
        None => FileSource::open(&args.input)?,
    };
    let raw = source
        .records()
        .with_context(|| format!("Unable to read listings from {}", args.input.display()))?;

    let config = args.clean_config();
    let cleaned = clean_sales(raw, &config)?;

    save_sales_csv(
        &args.output,
        &cleaned.records,
        SalesTable {
            track_shipping: config.track_shipping,
        },
    )
    .with_context(|| format!("Unable to write {}", args.output.display()))?;

    Ok(MarketReport {
        keyword: &args.keyword,
        stats: &cleaned.stats,
    }
    .to_string())
}

fn main() -> Result<()> {
    // logs go to stderr so the report can be piped
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    let report = run(&args)?;
    println!("\n{report}");
    Ok(())
}
