//! Inline values and values-file lists

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// File name used for the inline values document inside the working directory
pub const VALUES_FILE_NAME: &str = "values.yaml";

/// Check that `text` parses as a stream of one or more YAML documents
///
/// The parsed documents are discarded; helm reads the text itself.
pub fn validate_values(text: &str) -> Result<()> {
    for document in serde_yaml::Deserializer::from_str(text) {
        serde_yaml::Value::deserialize(document).map_err(CoreError::InvalidValues)?;
    }
    Ok(())
}

/// Write inline values to `<workdir>/values.yaml` after validating them
///
/// Returns `None` without touching the filesystem when there are no inline
/// values. Invalid YAML is rejected before anything is written.
pub fn materialize_values(workdir: &Path, values: Option<&str>) -> Result<Option<PathBuf>> {
    let Some(text) = values else {
        return Ok(None);
    };

    validate_values(text)?;

    let path = workdir.join(VALUES_FILE_NAME);
    std::fs::write(&path, text)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "wrote inline values");

    Ok(Some(path))
}

/// Split a newline separated list of values files, dropping blank lines
#[must_use]
pub fn values_files(raw: Option<&str>) -> Vec<String> {
    raw.map(|list| {
        list.lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
