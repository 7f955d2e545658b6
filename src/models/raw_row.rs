use serde::Deserialize;

use crate::config::TARGET_PRODUCT;
use crate::models::{NormalizedSalesRecord, RowRejection};
use crate::types::{parse_amount, parse_number, Monetary};

/// Represents a single row from a daily sales CSV file.
///
/// Every field is kept as raw text and defaults to empty when its column is missing,
/// so a short or oddly shaped row still deserializes and is judged by `normalize`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSalesRow {
    #[serde(default)]
    pub product: String,
    /// Currency formatted, e.g. `$3.00`.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub quantity: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub region: String
}

impl RawSalesRow {
    /// Validates the row and computes its revenue.
    ///
    /// # Errors
    /// Returns `RowRejection` if:
    /// - The product is not Pink Morsel (compared case-insensitively after trimming).
    /// - The price or quantity is not a non-negative number.
    /// - The revenue does not fit in a decimal.
    pub fn normalize(&self) -> Result<NormalizedSalesRecord, RowRejection> {
        if self.product.trim().to_lowercase() != TARGET_PRODUCT {
            return Err(RowRejection::product_mismatch(self))
        }

        let price = parse_amount(&self.price)
            .map_err(|error| RowRejection::invalid_price(self, error))?;

        let quantity = parse_number(&self.quantity)
            .map_err(|error| RowRejection::invalid_quantity(self, error))?;

        let sales = Monetary::from_sale(price, quantity)
            .map_err(|error| RowRejection::invalid_sales(self, error))?;

        Ok(NormalizedSalesRecord {
            sales,
            date: self.date.trim().to_string(),
            region: self.region.trim().to_string()
        })
    }
}
