mod errors;
mod monetary;

pub use errors::MonetaryError;
pub use monetary::{parse_amount, parse_number, Monetary};
