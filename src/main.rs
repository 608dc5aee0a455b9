//! SalesForge: synthetic retail sales analysis CLI
//!
//! This is the main entrypoint that orchestrates data generation,
//! aggregation, chart rendering and reporting.

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use salesforge::{generate_charts, generate_sales_table, print_report, summarize, Args, GeneratorConfig};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    setup_logging(args.verbose);

    run_pipeline(&args)
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Run the generate, aggregate, render and report steps in order
fn run_pipeline(args: &Args) -> Result<()> {
    let start_time = Instant::now();

    // Step 1: Generate data
    let (start, end) = args.date_range()?;
    let config = GeneratorConfig::new(start, end)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    let data_start = Instant::now();
    let table = generate_sales_table(&config, &mut rng);
    info!("Generated {} transactions ({} to {}, seed {})", table.len(), start, end, args.seed);
    debug!("Generation time: {:.3}s", data_start.elapsed().as_secs_f64());

    // Step 2: Aggregate
    let agg_start = Instant::now();
    let summary = summarize(&table);
    debug!(
        products = summary.product_sales.len(),
        months = summary.monthly_sales.len(),
        "Aggregation time: {:.3}s",
        agg_start.elapsed().as_secs_f64()
    );

    // Step 3: Render charts
    if args.no_charts {
        info!("Chart rendering disabled");
    } else {
        let viz_start = Instant::now();
        let written = generate_charts(&summary, &args.output_dir)?;
        info!("Rendered {} charts into {}", written.len(), args.output_dir.display());
        debug!("Visualization time: {:.3}s", viz_start.elapsed().as_secs_f64());
    }

    // Step 4: Report
    print_report(&summary, args.verbose);

    debug!("Total processing time: {:.3}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
