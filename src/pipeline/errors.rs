use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Resource failures that abort a whole batch.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unable to read data directory [{}] | {source}", path.display())]
    DataDirectory {
        path: PathBuf,
        source: io::Error
    },
    #[error("Unable to open input [{}] | {source}", path.display())]
    OpenInput {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Unable to read input [{}] | {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Unable to create output [{}] | {source}", path.display())]
    CreateOutput {
        path: PathBuf,
        source: csv::Error
    },
    #[error("Unable to write output [{}] | {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: csv::Error
    }
}
