use crate::config::{IngestSettings, OUTPUT_HEADERS};
use crate::models::{NormalizedSalesRecord, RawSalesRow, RowRejection};
use crate::pipeline::{discover_inputs, PipelineError};
use csv::{ReaderBuilder, Trim, Writer, WriterBuilder};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Counters for a single ingestion batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub files_read: usize,
    pub rows_read: usize,
    pub rows_written: usize,
    pub skipped_other_product: usize,
    pub skipped_invalid_number: usize,
    pub skipped_malformed: usize
}

impl IngestSummary {
    pub fn rows_skipped(&self) -> usize {
        self.skipped_other_product + self.skipped_invalid_number + self.skipped_malformed
    }

    fn record_rejection(&mut self, rejection: &RowRejection) {
        match rejection {
            RowRejection::ProductMismatch { .. } => self.skipped_other_product += 1,
            RowRejection::InvalidPrice { .. }
            | RowRejection::InvalidQuantity { .. }
            | RowRejection::InvalidSales { .. } => self.skipped_invalid_number += 1,
            RowRejection::Malformed(_) => self.skipped_malformed += 1
        }
    }
}

/// Result of a batch: the counters plus every record written, in output order.
#[derive(Debug, Clone, Default)]
pub struct IngestOutcome {
    pub summary: IngestSummary,
    pub records: Vec<NormalizedSalesRecord>
}

/// Filters raw daily sales files down to Pink Morsel revenue rows.
pub struct Ingestor {
    data_dir: PathBuf,
    output: PathBuf
}

impl Ingestor {
    pub fn new(data_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            output: output.into()
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Discovers the inputs in the data directory and processes them.
    pub fn run(&self) -> Result<IngestOutcome, PipelineError> {
        let inputs = discover_inputs(&self.data_dir)?;

        self.process_files(&inputs)
    }

    /// Processes `inputs` in lexicographic order into the output file.
    ///
    /// The output always starts with the `Sales,Date,Region` header, even when no row
    /// survives. Rows that fail validation are skipped and counted; only I/O failures
    /// on an input or the output abort the batch.
    pub fn process_files(&self, inputs: &[PathBuf]) -> Result<IngestOutcome, PipelineError> {
        let mut inputs = inputs.to_vec();
        inputs.sort();

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.output)
            .map_err(|source| PipelineError::CreateOutput { path: self.output.clone(), source })?;

        writer.write_record(OUTPUT_HEADERS)
            .map_err(|source| self.write_error(source))?;

        let mut outcome = IngestOutcome::default();

        for path in &inputs {
            self.ingest_file(path, &mut writer, &mut outcome)?;
            outcome.summary.files_read += 1;
        }

        writer.flush()
            .map_err(|error| self.write_error(error.into()))?;

        info!(
            "Wrote {} rows to [{}] from {} files ({} skipped)",
            outcome.summary.rows_written,
            self.output.display(),
            outcome.summary.files_read,
            outcome.summary.rows_skipped()
        );

        Ok(outcome)
    }

    fn ingest_file(&self, path: &Path, writer: &mut Writer<File>, outcome: &mut IngestOutcome) -> Result<(), PipelineError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|source| PipelineError::OpenInput { path: path.to_path_buf(), source })?;

        for result in reader.deserialize::<RawSalesRow>() {
            outcome.summary.rows_read += 1;

            let normalized = match result {
                Ok(row) => row.normalize(),
                Err(error) if error.is_io_error() => {
                    return Err(PipelineError::ReadInput { path: path.to_path_buf(), source: error });
                }
                Err(error) => Err(RowRejection::Malformed(error.to_string()))
            };

            match normalized {
                Ok(record) => {
                    writer.serialize(&record)
                        .map_err(|source| self.write_error(source))?;

                    outcome.summary.rows_written += 1;
                    outcome.records.push(record);
                }
                Err(rejection) => {
                    debug!("[{}] {rejection}", path.display());
                    outcome.summary.record_rejection(&rejection);
                }
            }
        }

        Ok(())
    }

    fn write_error(&self, source: csv::Error) -> PipelineError {
        PipelineError::WriteOutput { path: self.output.clone(), source }
    }
}

impl From<&IngestSettings> for Ingestor {
    fn from(settings: &IngestSettings) -> Self {
        Ingestor::new(&settings.data_dir, &settings.output)
    }
}
