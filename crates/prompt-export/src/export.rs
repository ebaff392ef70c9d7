//! Export configuration, artifact writing, and the load → build → write
//! pipeline.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::artifact::{self, Artifact};
use crate::dataset;
use crate::error::{ExportError, Result};

/// Experiment name used when none is given.
pub const DEFAULT_EXPERIMENT: &str = "translator";

/// Settings for a single export run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// JSONL dataset to read.
    pub input: PathBuf,
    /// Where the artifact JSON is written. Parent directories are created.
    pub output: PathBuf,
    /// Value of the artifact's `name` field. Default: `"translator"`.
    pub experiment: String,
}

impl ExportConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            experiment: DEFAULT_EXPERIMENT.to_string(),
        }
    }

    pub fn with_experiment(mut self, experiment: impl Into<String>) -> Self {
        self.experiment = experiment.into();
        self
    }
}

/// Write `artifact` to `path` as 2-space-indented JSON.
///
/// Non-ASCII text is written as-is, not escaped. Missing parent directories
/// are created first. The write is not atomic.
pub fn write_artifact(artifact: &Artifact, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(artifact)?;
    std::fs::write(path, json).map_err(|e| ExportError::io(path, e))?;
    debug!("Wrote artifact '{}' to {}", artifact.name, path.display());
    Ok(())
}

/// Run the whole export: load the dataset, build the artifact, write it.
///
/// Nothing is written unless loading and building both succeed.
pub fn run(config: &ExportConfig) -> Result<Artifact> {
    let records = dataset::load(&config.input)?;
    let artifact = artifact::build(&config.experiment, &records)?;
    write_artifact(&artifact, &config.output)?;
    info!(
        "Exported '{}' ({} few-shots, {} records)",
        artifact.name,
        artifact.few_shots.len(),
        artifact.provenance.dataset_size
    );
    Ok(artifact)
}
