use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::{DailyAggregate, NormalizedSalesRecord, RegionSelector};
use crate::pipeline::PipelineError;
use crate::types::Monetary;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A processed CSV row before its `Sales` column has been checked.
#[derive(Debug, Deserialize)]
struct StoredSalesRow {
    #[serde(rename = "Sales", default)]
    sales: String,
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Region", default)]
    region: String
}

/// The normalized record set, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct SalesDataset {
    records: Vec<NormalizedSalesRecord>
}

impl SalesDataset {
    pub fn from_records(records: Vec<NormalizedSalesRecord>) -> Self {
        Self { records }
    }

    /// Reloads a processed `Sales,Date,Region` file.
    ///
    /// The file may have been edited by hand, so a row whose `Sales` value is not a
    /// number is treated as missing and left out rather than failing the load.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|source| PipelineError::OpenInput { path: path.to_path_buf(), source })?;

        let mut records = Vec::new();

        for result in reader.deserialize::<StoredSalesRow>() {
            let row = match result {
                Ok(row) => row,
                Err(error) if error.is_io_error() => {
                    return Err(PipelineError::ReadInput { path: path.to_path_buf(), source: error });
                }
                Err(error) => {
                    warn!("Excluding unreadable processed row: {error}");
                    continue;
                }
            };

            match Monetary::from_str(&row.sales) {
                Ok(sales) => records.push(NormalizedSalesRecord {
                    sales,
                    date: row.date,
                    region: row.region
                }),
                Err(error) => warn!("Excluding non-numeric sales [{}] on [{}] | {error}", row.sales, row.date)
            }
        }

        info!("Loaded {} records from [{}]", records.len(), path.display());

        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn daily_totals(&self, selector: &RegionSelector) -> Vec<DailyAggregate> {
        daily_totals(&self.records, selector)
    }
}

/// Sums sales per date for the records the selector keeps, ascending by date.
///
/// Dates without a matching record are absent, not zero. A record whose date is not
/// `YYYY-MM-DD` cannot be placed on the axis and is left out, as is a date whose total
/// overflows cent precision.
pub fn daily_totals(records: &[NormalizedSalesRecord], selector: &RegionSelector) -> Vec<DailyAggregate> {
    let mut totals = BTreeMap::<NaiveDate, Option<Monetary>>::new();

    for record in records.iter().filter(|record| selector.matches(&record.region)) {
        let Ok(date) = NaiveDate::parse_from_str(&record.date, DATE_FORMAT) else {
            warn!("Excluding record with unparseable date [{}]", record.date);
            continue;
        };

        let total = totals.entry(date).or_insert_with(|| Some(Monetary::new()));
        *total = total.and_then(|sum| sum.checked_add(record.sales));
    }

    totals.into_iter()
        .filter_map(|(date, total_sales)| match total_sales {
            Some(total_sales) => Some(DailyAggregate { date, total_sales }),
            None => {
                warn!("Excluding total on [{date}]: sales overflow cent precision");
                None
            }
        })
        .collect()
}
