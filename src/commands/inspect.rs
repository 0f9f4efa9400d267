//! Structural scan of the WordNet data files
//!
//! Reports synset and lemma counts per family and pointer symbol frequencies,
//! using the same record decoder as the relation pipeline.

use crate::core::{PartOfSpeech, SynsetRecord};
use crate::error::{Result, WordNetError};
use crate::wordnet::{DataSource, FamilyLoad, LoadStats};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Symbols listed per family in the report
pub const FAMILY_TOP_SYMBOLS: usize = 5;

/// Counts for one family file
#[derive(Debug, Clone)]
pub struct FamilySummary {
    pub pos: PartOfSpeech,
    pub synsets: usize,
    pub lemma_tokens: usize,
    pub pointer_counts: FxHashMap<String, usize>,
    pub stats: LoadStats,
}

impl FamilySummary {
    /// Summarize decoded records
    #[must_use]
    pub fn from_records(records: &[SynsetRecord], stats: LoadStats) -> Self {
        let mut pointer_counts: FxHashMap<String, usize> = FxHashMap::default();
        for edge in records.iter().flat_map(|r| &r.pointers) {
            *pointer_counts.entry(edge.symbol.clone()).or_insert(0) += 1;
        }

        Self {
            pos: stats.pos,
            synsets: records.len(),
            lemma_tokens: records.iter().map(|r| r.lemmas.len()).sum(),
            pointer_counts,
            stats,
        }
    }

    #[must_use]
    pub fn average_lemmas(&self) -> f64 {
        if self.synsets == 0 {
            0.0
        } else {
            self.lemma_tokens as f64 / self.synsets as f64
        }
    }

    #[must_use]
    pub fn top_symbols(&self, n: usize) -> Vec<(String, usize)> {
        top_counts(&self.pointer_counts, n)
    }
}

/// Result of scanning a data source
#[derive(Debug, Clone)]
pub struct InspectReport {
    pub families: Vec<FamilySummary>,
    /// Family files that were not found
    pub missing: Vec<PathBuf>,
    /// Pointer symbol counts across all families
    pub pointer_counts: FxHashMap<String, usize>,
    /// How many symbols to list in the overall ranking
    pub top: usize,
}

impl InspectReport {
    #[must_use]
    pub fn distinct_symbols(&self) -> usize {
        self.pointer_counts.len()
    }

    /// Most frequent symbols overall
    #[must_use]
    pub fn top_symbols(&self) -> Vec<(String, usize)> {
        top_counts(&self.pointer_counts, self.top)
    }

    /// Plain-text rendering, suitable for writing to a file
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in &self.missing {
            writeln!(f, "[warn] missing {}", path.display())?;
        }
        writeln!(f, "=== WordNet Basic Structure Summary ===")?;
        for family in &self.families {
            writeln!(
                f,
                "POS {:4} | synsets: {:6} | lemma_tokens: {:6} | avg_lemmas_per_synset: {:4.2}",
                family.pos.file_suffix(),
                family.synsets,
                family.lemma_tokens,
                family.average_lemmas()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total distinct pointer symbols: {}", self.distinct_symbols())?;

        let top = self.top_symbols();
        if top.is_empty() {
            writeln!(f, "No pointer symbols parsed.")?;
        } else {
            writeln!(f, "Top {} pointer symbols:", top.len())?;
            for (symbol, count) in &top {
                writeln!(f, "  {symbol:3} {count}")?;
            }
        }

        writeln!(f, "\nPer-POS pointer symbol top {FAMILY_TOP_SYMBOLS}:")?;
        for family in &self.families {
            writeln!(f, "  {}:", family.pos.file_suffix())?;
            for (symbol, count) in family.top_symbols(FAMILY_TOP_SYMBOLS) {
                writeln!(f, "    {symbol:3} {count}")?;
            }
        }
        Ok(())
    }
}

/// Highest counts first, ties broken by symbol
fn top_counts(counts: &FxHashMap<String, usize>, n: usize) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts
        .iter()
        .map(|(symbol, &count)| (symbol.clone(), count))
        .collect();
    ranked.sort_unstable_by(|(sa, ca), (sb, cb)| cb.cmp(ca).then_with(|| sa.cmp(sb)));
    ranked.truncate(n);
    ranked
}

/// Scan every family file present in `source`
///
/// Absent files are reported but tolerated as long as at least one exists.
///
/// # Errors
/// Returns `MissingSource` when none of the four files exist, or `Io` when a
/// present file cannot be read.
pub fn inspect_source(source: &DataSource, top: usize) -> Result<InspectReport> {
    let missing = source.missing(&PartOfSpeech::ALL);
    if missing.len() == PartOfSpeech::ALL.len() {
        return Err(WordNetError::MissingSource { paths: missing });
    }
    for path in &missing {
        warn!(path = %path.display(), "data file missing, skipping family");
    }

    let present: Vec<PartOfSpeech> = PartOfSpeech::ALL
        .into_iter()
        .filter(|pos| source.is_present(*pos))
        .collect();
    let loads: Vec<FamilyLoad> = present
        .par_iter()
        .map(|&pos| source.load_family(pos))
        .collect::<Result<_>>()?;

    let families: Vec<FamilySummary> = loads
        .iter()
        .map(|load| FamilySummary::from_records(&load.records, load.stats))
        .collect();

    let mut pointer_counts: FxHashMap<String, usize> = FxHashMap::default();
    for family in &families {
        for (symbol, count) in &family.pointer_counts {
            *pointer_counts.entry(symbol.clone()).or_insert(0) += count;
        }
    }

    Ok(InspectReport {
        families,
        missing,
        pointer_counts,
        top,
    })
}

/// Write the plain-text report, creating parent directories
///
/// # Errors
/// Returns `Io` if the directory or file cannot be written.
pub fn write_report(report: &InspectReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| WordNetError::io(parent, e))?;
    }
    fs::write(path, report.render()).map_err(|e| WordNetError::io(path, e))
}
