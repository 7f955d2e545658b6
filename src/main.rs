mod aggregation;
mod config;
mod models;
mod pipeline;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::aggregation::{SalesDataset, SalesView};
use crate::config::{Cli, Command, OutputFormat, ViewSettings};
use crate::models::RegionSelector;
use crate::pipeline::Ingestor;

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    match cli.command {
        Command::Process(settings) => {
            let ingestor = Ingestor::from(&settings);
            let outcome = ingestor.run()?;

            println!("Wrote {} rows to {}", outcome.summary.rows_written, ingestor.output().display());
        }
        Command::Aggregate { input, view } => {
            let dataset = SalesDataset::load(&input)?;
            write_view_to_stdout(&dataset, &view)?;
        }
        Command::Run { ingest, view } => {
            let outcome = Ingestor::from(&ingest).run()?;
            let dataset = SalesDataset::from_records(outcome.records);
            write_view_to_stdout(&dataset, &view)?;
        }
    }

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the aggregated series, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_view_to_stdout(dataset: &SalesDataset, settings: &ViewSettings) -> Result<()> {
    if dataset.is_empty() {
        warn!("No Pink Morsel records to aggregate");
    } else {
        info!("Aggregating {} Pink Morsel records", dataset.len());
    }

    if let (RegionSelector::Only(selected), None) = (&settings.region, settings.region.region()) {
        warn!("Region selector [{selected}] is not one of {:?}, no records will match", RegionSelector::options());
    }

    let aggregates = dataset.daily_totals(&settings.region);
    let view = SalesView::build(&aggregates, &settings.region, settings.reference_date);
    let summary = view.price_change_summary();

    info!(
        "Region [{}]: {} days, mean daily sales before {} = {:?}, from {} = {:?}",
        view.region,
        view.series.len(),
        view.reference_date,
        summary.mean_before,
        view.reference_date,
        summary.mean_after
    );

    let mut output = BufWriter::new(stdout().lock());

    match settings.format {
        OutputFormat::Csv => {
            writeln!(output, "Date,Sales")?;

            for aggregate in &aggregates {
                writeln!(output, "{},{}", aggregate.date, aggregate.total_sales)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut output, &view)?;
            writeln!(output)?;
        }
    }

    output.flush()?;

    Ok(())
}
