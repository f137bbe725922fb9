//! Discovery and deserialization of the pre-fitted artifact pair.
//!
//! The scaler and classifier are searched for in an ordered list of
//! candidate directories. The first directory holding a valid pair wins;
//! directories with a broken pair are reported and skipped. The outcome is
//! cached process-wide by [`ArtifactStore`].

pub mod store;

pub use store::ArtifactStore;

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};

use crate::ml::{SoftmaxClassifier, StandardScaler};

/// Classifier artifact filename.
pub const MODEL_FILE: &str = "model.json";
/// Scaler artifact filename.
pub const SCALER_FILE: &str = "scaler.json";
/// Subdirectory searched after the working directory itself.
pub const MODELS_SUBDIR: &str = "models";

/// Errors raised while loading one candidate directory.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file is not valid JSON for the expected type.
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The file deserialized but failed dimensional validation.
    #[error("Rejected {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// One candidate directory that held both files but failed to load.
#[derive(Debug)]
pub struct CandidateFailure {
    pub dir: PathBuf,
    pub error: ArtifactError,
}

/// Accumulated diagnostics after exhausting every candidate directory.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub searched: Vec<PathBuf>,
    pub failures: Vec<CandidateFailure>,
}

impl LoadReport {
    /// Instructional message naming the required files and every searched
    /// location, shown on the unready screen.
    pub fn message(&self) -> String {
        let mut lines = vec![
            format!("Could not load `{SCALER_FILE}` and `{MODEL_FILE}`."),
            "Place both files in one of the searched locations:".to_string(),
        ];
        for dir in &self.searched {
            lines.push(format!("  - {}", dir.display()));
        }
        for failure in &self.failures {
            lines.push(format!(
                "Candidate {} was rejected: {}",
                failure.dir.display(),
                failure.error
            ));
        }
        lines.join("\n")
    }
}

/// A loaded, validated artifact pair plus its provenance.
#[derive(Debug, Clone)]
pub struct LoadedArtifacts {
    pub scaler: StandardScaler,
    pub classifier: SoftmaxClassifier,
    pub source_dir: PathBuf,
    /// Directories that held a pair but failed before this one succeeded.
    pub prior_failures: Vec<PathBuf>,
}

/// Result of the one-shot artifact search.
#[derive(Debug)]
pub enum LoadOutcome {
    Ready(Box<LoadedArtifacts>),
    Unready(LoadReport),
}

/// Candidate directories in search order: the working directory, then its
/// `models/` subdirectory.
pub fn default_candidates() -> Vec<PathBuf> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    vec![cwd.clone(), cwd.join(MODELS_SUBDIR)]
}

/// Search `candidates` in order for a valid scaler + classifier pair.
///
/// Directories missing one or both files are skipped silently. A directory
/// holding both files that fails to read, parse, or validate is recorded
/// and the search continues.
pub fn load_pair(candidates: &[PathBuf]) -> LoadOutcome {
    let mut report = LoadReport::default();
    for dir in candidates {
        report.searched.push(dir.clone());
        let scaler_path = dir.join(SCALER_FILE);
        let model_path = dir.join(MODEL_FILE);
        if !scaler_path.is_file() || !model_path.is_file() {
            continue;
        }
        match load_dir(&scaler_path, &model_path) {
            Ok((scaler, classifier)) => {
                info!("Loaded artifacts from {}", dir.display());
                let prior_failures = report.failures.iter().map(|f| f.dir.clone()).collect();
                return LoadOutcome::Ready(Box::new(LoadedArtifacts {
                    scaler,
                    classifier,
                    source_dir: dir.clone(),
                    prior_failures,
                }));
            }
            Err(error) => {
                warn!("Skipping artifacts in {}: {error}", dir.display());
                report.failures.push(CandidateFailure {
                    dir: dir.clone(),
                    error,
                });
            }
        }
    }
    warn!(
        "No usable artifact pair in {} searched directories",
        report.searched.len()
    );
    LoadOutcome::Unready(report)
}

fn load_dir(
    scaler_path: &Path,
    model_path: &Path,
) -> Result<(StandardScaler, SoftmaxClassifier), ArtifactError> {
    let scaler: StandardScaler = read_json(scaler_path)?;
    scaler.validate().map_err(|reason| ArtifactError::Invalid {
        path: scaler_path.to_path_buf(),
        reason,
    })?;
    let classifier: SoftmaxClassifier = read_json(model_path)?;
    classifier
        .validate()
        .map_err(|reason| ArtifactError::Invalid {
            path: model_path.to_path_buf(),
            reason,
        })?;
    Ok((scaler, classifier))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
