//! Data sources and file loading
//!
//! A [`DataSource`] names the four family data files. Where those paths come
//! from (an explicit directory, the newest extracted dataset, a test fixture)
//! is the caller's business.

use super::decoder::{DecodeOutcome, decode_line};
use super::index::SynsetIndex;
use crate::core::{PartOfSpeech, SynsetRecord};
use crate::error::{Result, WordNetError};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Malformed lines logged individually per file before going quiet
const MALFORMED_LOG_LIMIT: usize = 5;

/// Paths of the four family data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub noun_path: PathBuf,
    pub verb_path: PathBuf,
    pub adjective_path: PathBuf,
    pub adverb_path: PathBuf,
}

impl DataSource {
    /// Standard `data.noun`, `data.verb`, `data.adj`, `data.adv` inside `dir`
    ///
    /// # Examples
    /// ```
    /// use std::path::Path;
    /// use wordnet_relations::wordnet::DataSource;
    ///
    /// let source = DataSource::from_dir("wn");
    /// assert_eq!(source.verb_path, Path::new("wn/data.verb"));
    /// ```
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let path = |pos: PartOfSpeech| dir.join(pos.data_file_name());
        Self {
            noun_path: path(PartOfSpeech::Noun),
            verb_path: path(PartOfSpeech::Verb),
            adjective_path: path(PartOfSpeech::Adjective),
            adverb_path: path(PartOfSpeech::Adverb),
        }
    }

    /// Path of one family's data file
    #[must_use]
    pub fn path(&self, pos: PartOfSpeech) -> &Path {
        match pos {
            PartOfSpeech::Noun => &self.noun_path,
            PartOfSpeech::Verb => &self.verb_path,
            PartOfSpeech::Adjective => &self.adjective_path,
            PartOfSpeech::Adverb => &self.adverb_path,
        }
    }

    #[must_use]
    pub fn is_present(&self, pos: PartOfSpeech) -> bool {
        self.path(pos).is_file()
    }

    /// Paths of the requested families that do not exist
    #[must_use]
    pub fn missing(&self, families: &[PartOfSpeech]) -> Vec<PathBuf> {
        families
            .iter()
            .filter(|pos| !self.is_present(**pos))
            .map(|pos| self.path(*pos).to_path_buf())
            .collect()
    }

    /// Fail unless every requested family file exists
    ///
    /// # Errors
    /// Returns [`WordNetError::MissingSource`] listing every absent path.
    pub fn require(&self, families: &[PartOfSpeech]) -> Result<()> {
        let paths = self.missing(families);
        if paths.is_empty() {
            Ok(())
        } else {
            Err(WordNetError::MissingSource { paths })
        }
    }

    /// Read and decode one family's data file
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    ///
    /// # Errors
    /// Returns [`WordNetError::Io`] if the file cannot be read.
    pub fn load_family(&self, pos: PartOfSpeech) -> Result<FamilyLoad> {
        let path = self.path(pos);
        let bytes = fs::read(path).map_err(|e| WordNetError::io(path, e))?;
        let text = String::from_utf8_lossy(&bytes);
        let load = decode_family(&text, pos);

        info!(
            family = %pos,
            path = %path.display(),
            records = load.stats.records,
            malformed = load.stats.malformed,
            foreign = load.stats.foreign,
            "decoded data file"
        );
        Ok(load)
    }

    /// Load the requested families into one index
    ///
    /// Files are decoded in parallel; each family owns a disjoint key space so
    /// the merge order does not matter.
    ///
    /// # Errors
    /// Returns `MissingSource` if any requested file is absent, or `Io` if one
    /// cannot be read.
    pub fn load_index(&self, families: &[PartOfSpeech]) -> Result<LoadedIndex> {
        self.require(families)?;

        let loads: Vec<FamilyLoad> = families
            .par_iter()
            .map(|&pos| self.load_family(pos))
            .collect::<Result<_>>()?;

        let mut index = SynsetIndex::new();
        let mut stats = Vec::with_capacity(loads.len());
        for load in loads {
            index.extend(load.records);
            stats.push(load.stats);
        }

        Ok(LoadedIndex { index, stats })
    }
}

/// Line counts from decoding one family file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub pos: PartOfSpeech,
    pub lines: usize,
    pub records: usize,
    pub not_data: usize,
    pub foreign: usize,
    pub malformed: usize,
}

impl LoadStats {
    #[must_use]
    pub const fn new(pos: PartOfSpeech) -> Self {
        Self {
            pos,
            lines: 0,
            records: 0,
            not_data: 0,
            foreign: 0,
            malformed: 0,
        }
    }
}

/// Records and statistics for one family
#[derive(Debug, Clone)]
pub struct FamilyLoad {
    pub records: Vec<SynsetRecord>,
    pub stats: LoadStats,
}

/// An index together with the per-file statistics that built it
#[derive(Debug, Clone)]
pub struct LoadedIndex {
    pub index: SynsetIndex,
    pub stats: Vec<LoadStats>,
}

/// Decode every line of one family's file contents
#[must_use]
pub fn decode_family(text: &str, pos: PartOfSpeech) -> FamilyLoad {
    let mut stats = LoadStats::new(pos);
    let mut records = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        stats.lines += 1;
        match decode_line(line, pos) {
            DecodeOutcome::Record(record) => {
                stats.records += 1;
                records.push(record);
            }
            DecodeOutcome::NotData => stats.not_data += 1,
            DecodeOutcome::Foreign(other) => {
                stats.foreign += 1;
                debug!(family = %pos, line = line_no + 1, found = %other, "skipping foreign record");
            }
            DecodeOutcome::Malformed(reason) => {
                stats.malformed += 1;
                if stats.malformed <= MALFORMED_LOG_LIMIT {
                    debug!(family = %pos, line = line_no + 1, %reason, "dropping malformed record");
                }
            }
        }
    }

    FamilyLoad { records, stats }
}
