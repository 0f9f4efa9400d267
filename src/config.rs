//! Runtime settings
//!
//! Where the WordNet data lives. Values come from CLI flags, then environment
//! variables, then the defaults below.

use crate::error::{Result, WordNetError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Explicit data directory holding the `data.*` files
pub const DATA_DIR_ENV: &str = "WORDNET_DIR";
/// Root under which dated datasets are extracted
pub const RAW_ROOT_ENV: &str = "WORDNET_RAW_ROOT";

pub const DEFAULT_RAW_ROOT: &str = "data/raw";
pub const DEFAULT_DATASET_PREFIX: &str = "english-wordnet-2024_";
pub const DEFAULT_INNER_DIR: &str = "oewn2024";

/// Data location settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Use this directory directly when set
    pub data_dir: Option<PathBuf>,
    /// Search root for `<prefix><date>` dataset directories
    pub raw_root: PathBuf,
    pub dataset_prefix: String,
    /// Directory inside a dataset that holds the data files
    pub inner_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            raw_root: PathBuf::from(DEFAULT_RAW_ROOT),
            dataset_prefix: DEFAULT_DATASET_PREFIX.to_string(),
            inner_dir: DEFAULT_INNER_DIR.to_string(),
        }
    }
}

impl Settings {
    /// Defaults overridden by `WORDNET_DIR` and `WORDNET_RAW_ROOT`
    #[must_use]
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(dir) = env::var(DATA_DIR_ENV) {
            settings.data_dir = Some(PathBuf::from(dir));
        }
        if let Ok(root) = env::var(RAW_ROOT_ENV) {
            settings.raw_root = PathBuf::from(root);
        }
        settings
    }

    /// Directory to read the data files from
    ///
    /// # Errors
    /// Returns [`WordNetError::NoDataset`] if no explicit directory is set and
    /// no dataset directory can be found under the raw root.
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let dir = latest_dataset_dir(&self.raw_root, &self.dataset_prefix)?;
        debug!(dataset = %dir.display(), "selected latest dataset");
        Ok(dir.join(&self.inner_dir))
    }
}

/// Newest `<prefix><digits>` directory under `root`
///
/// Date suffixes are compared as strings, which orders `YYYYMMDD` correctly.
///
/// # Errors
/// Returns [`WordNetError::NoDataset`] when `root` is unreadable or holds no
/// matching directory.
pub fn latest_dataset_dir(root: &Path, prefix: &str) -> Result<PathBuf> {
    let no_dataset = || WordNetError::NoDataset {
        root: root.to_path_buf(),
        prefix: prefix.to_string(),
    };
    let entries = fs::read_dir(root).map_err(|_| no_dataset())?;

    entries
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.path().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let suffix = dataset_suffix(&name, prefix)?.to_string();
            Some((suffix, entry.path()))
        })
        .max_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, path)| path)
        .ok_or_else(no_dataset)
}

/// Numeric date suffix of a dataset directory name
fn dataset_suffix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    if !name.starts_with(prefix) {
        return None;
    }
    let (_, suffix) = name.rsplit_once('_')?;
    (!suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit())).then_some(suffix)
}
