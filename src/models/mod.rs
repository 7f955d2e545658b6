mod aggregate;
mod errors;
mod raw_row;
mod record;
mod region;

pub use aggregate::DailyAggregate;
pub use errors::RowRejection;
pub use raw_row::RawSalesRow;
pub use record::NormalizedSalesRecord;
pub use region::{Region, RegionSelector};
