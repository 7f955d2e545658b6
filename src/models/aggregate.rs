use chrono::NaiveDate;

use crate::types::Monetary;

/// Total sales for one calendar date after region filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyAggregate {
    pub date: NaiveDate,
    pub total_sales: Monetary
}
