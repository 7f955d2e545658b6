use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{INPUT_EXTENSION, INPUT_PREFIX};
use crate::pipeline::PipelineError;

/// Lists the `daily_sales_data_*.csv` files in `data_dir`, sorted lexicographically.
///
/// An existing directory with no matching files yields an empty list; a missing or
/// unreadable directory is an error.
pub fn discover_inputs(data_dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let entries = fs::read_dir(data_dir).map_err(|source| PipelineError::DataDirectory {
        path: data_dir.to_path_buf(),
        source
    })?;

    let mut inputs = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|source| PipelineError::DataDirectory {
            path: data_dir.to_path_buf(),
            source
        })?;

        let path = entry.path();

        if path.is_file() && is_input_file(&path) {
            inputs.push(path);
        }
    }

    inputs.sort();

    if inputs.is_empty() {
        warn!("No {INPUT_PREFIX}*.{INPUT_EXTENSION} files found in [{}]", data_dir.display());
    } else {
        debug!("Discovered {} input files in [{}]", inputs.len(), data_dir.display());
    }

    Ok(inputs)
}

fn is_input_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_prefix(INPUT_PREFIX))
        .and_then(|rest| rest.strip_suffix(INPUT_EXTENSION))
        .is_some_and(|stem| stem.ends_with('.'))
}
