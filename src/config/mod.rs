
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::models::RegionSelector;

/// Product kept by ingestion, compared against the lowercased `product` column.
pub const TARGET_PRODUCT: &str = "pink morsel";

/// Input files are `daily_sales_data_*.csv` inside the data directory.
pub const INPUT_PREFIX: &str = "daily_sales_data_";
pub const INPUT_EXTENSION: &str = "csv";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT: &str = "data/processed_sales.csv";

/// Date of the Pink Morsel price increase, annotated on the chart.
pub const PRICE_INCREASE_DATE: &str = "2021-01-15";

pub const OUTPUT_HEADERS: [&str; 3] = ["Sales", "Date", "Region"];

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "morsel-sales", version, about = "Pink Morsel sales ingestion and daily aggregation")]
pub struct Cli {
    /// Log level written to stderr: error, warn, info, debug or trace.
    #[arg(long, global = true, default_value = "error")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Filter the raw daily sales files down to Pink Morsel revenue rows.
    Process(IngestSettings),
    /// Aggregate a processed CSV into a daily series.
    Aggregate {
        /// Processed CSV produced by `process`.
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        input: PathBuf,

        #[command(flatten)]
        view: ViewSettings,
    },
    /// Process, then aggregate the freshly ingested records.
    Run {
        #[command(flatten)]
        ingest: IngestSettings,

        #[command(flatten)]
        view: ViewSettings,
    },
}

/// Where ingestion reads from and writes to.
#[derive(Debug, Clone, Args)]
pub struct IngestSettings {
    /// Directory holding the daily_sales_data_*.csv files.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Processed CSV to (over)write.
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}

/// How the aggregated view is selected and rendered.
#[derive(Debug, Clone, Args)]
pub struct ViewSettings {
    /// Region selector: all, north, south, east or west.
    #[arg(short = 'r', long, default_value = "all")]
    pub region: RegionSelector,

    /// Reference date annotated on the chart (YYYY-MM-DD).
    #[arg(long, default_value = PRICE_INCREASE_DATE)]
    pub reference_date: NaiveDate,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// `Date,Sales` rows.
    Csv,
    /// The full chart view, reference date included.
    Json,
}
