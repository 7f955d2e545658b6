mod dataset;
#[cfg(test)]
mod tests;
mod view;

pub use dataset::{daily_totals, SalesDataset};
pub use view::SalesView;
