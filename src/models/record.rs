use serde::Serialize;

use crate::types::Monetary;

/// A validated Pink Morsel sale line, as written to the processed CSV.
///
/// `date` and `region` are carried verbatim from the raw row; they are only
/// interpreted at aggregation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSalesRecord {
    #[serde(rename = "Sales")]
    pub sales: Monetary,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Region")]
    pub region: String
}
