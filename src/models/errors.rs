use crate::models::RawSalesRow;
use crate::types::MonetaryError;
use thiserror::Error;

/// Why a raw row produced no normalized record. Never fatal to a batch.
#[derive(Debug, Error)]
pub enum RowRejection {
    #[error("Row skipped: product [{product}] is not Pink Morsel")]
    ProductMismatch {
        product: String
    },
    #[error("Row skipped: invalid price [{price}] on [{date}]:[{region}] | {source}")]
    InvalidPrice {
        price: String,
        date: String,
        region: String,
        source: MonetaryError
    },
    #[error("Row skipped: invalid quantity [{quantity}] on [{date}]:[{region}] | {source}")]
    InvalidQuantity {
        quantity: String,
        date: String,
        region: String,
        source: MonetaryError
    },
    #[error("Row skipped: sales for price [{price}] and quantity [{quantity}] cannot be represented | {source}")]
    InvalidSales {
        price: String,
        quantity: String,
        source: MonetaryError
    },
    #[error("Row skipped: unreadable CSV record | {0}")]
    Malformed(String)
}

impl RowRejection {
    pub fn product_mismatch(row: &RawSalesRow) -> Self {
        Self::ProductMismatch { product: row.product.clone() }
    }

    pub fn invalid_price(row: &RawSalesRow, source: MonetaryError) -> Self {
        Self::InvalidPrice {
            price: row.price.clone(),
            date: row.date.clone(),
            region: row.region.clone(),
            source
        }
    }

    pub fn invalid_quantity(row: &RawSalesRow, source: MonetaryError) -> Self {
        Self::InvalidQuantity {
            quantity: row.quantity.clone(),
            date: row.date.clone(),
            region: row.region.clone(),
            source
        }
    }

    pub fn invalid_sales(row: &RawSalesRow, source: MonetaryError) -> Self {
        Self::InvalidSales {
            price: row.price.clone(),
            quantity: row.quantity.clone(),
            source
        }
    }
}
