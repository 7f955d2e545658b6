use chrono::NaiveDate;
use serde::Serialize;
use tracing::warn;

use crate::models::{DailyAggregate, RegionSelector};

const TITLE: &str = "Pink Morsel Sales Over Time";
const ANNOTATION: &str = "Price Increase";

/// One plotted point of the daily sales line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub sales: f64
}

/// Mean daily sales on either side of the reference date.
///
/// The reference date itself counts as "after", since the new price applies from that day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChangeSummary {
    pub days_before: usize,
    pub days_after: usize,
    pub mean_before: Option<f64>,
    pub mean_after: Option<f64>
}

/// Everything the chart layer needs to draw one region selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesView {
    pub title: &'static str,
    pub region: String,
    pub label: String,
    pub colour: &'static str,
    pub reference_date: NaiveDate,
    pub annotation: &'static str,
    pub series: Vec<SeriesPoint>
}

impl SalesView {
    /// Builds the plotted series from ordered aggregates.
    ///
    /// A total with no `f64` form is a missing value and is dropped from the series.
    /// `reference_date` is passed through untouched.
    pub fn build(aggregates: &[DailyAggregate], selector: &RegionSelector, reference_date: NaiveDate) -> Self {
        let series = aggregates.iter()
            .filter_map(|aggregate| match aggregate.total_sales.to_f64() {
                Some(sales) => Some(SeriesPoint { date: aggregate.date, sales }),
                None => {
                    warn!("Excluding non-numeric total [{}] on [{}]", aggregate.total_sales, aggregate.date);
                    None
                }
            })
            .collect();

        Self {
            title: TITLE,
            region: selector.to_string(),
            label: selector.label(),
            colour: selector.colour(),
            reference_date,
            annotation: ANNOTATION,
            series
        }
    }

    pub fn price_change_summary(&self) -> PriceChangeSummary {
        let (before, after): (Vec<&SeriesPoint>, Vec<&SeriesPoint>) = self.series.iter()
            .partition(|point| point.date < self.reference_date);

        PriceChangeSummary {
            days_before: before.len(),
            days_after: after.len(),
            mean_before: mean(&before),
            mean_after: mean(&after)
        }
    }
}

fn mean(points: &[&SeriesPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }

    Some(points.iter().map(|point| point.sales).sum::<f64>() / points.len() as f64)
}
