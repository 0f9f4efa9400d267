//! Error types
//!
//! Only run-level failures live here. Per-line decode problems are reported as
//! [`DecodeOutcome`](crate::wordnet::DecodeOutcome) values and never abort a run.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type defaulting to [`WordNetError`]
pub type Result<T, E = WordNetError> = std::result::Result<T, E>;

/// Failures that stop a run
#[derive(Debug, Error)]
pub enum WordNetError {
    /// Required data files are absent
    #[error("missing WordNet data file(s): {}", join_paths(.paths))]
    MissingSource { paths: Vec<PathBuf> },

    /// A data file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The default dataset selector found nothing to pick
    #[error("no {prefix}<date> dataset directories found under {}", .root.display())]
    NoDataset { root: PathBuf, prefix: String },
}

impl WordNetError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
