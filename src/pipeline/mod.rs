mod discover;
mod errors;
mod ingestor;

pub use discover::discover_inputs;
pub use errors::PipelineError;
pub use ingestor::{IngestOutcome, Ingestor};
