//! Derivational relation command
//!
//! Loads the two families a relation needs, resolves its pointers and groups
//! the resulting lemma pairs, e.g. verbs to their derivationally related nouns.

use crate::error::Result;
use crate::relations::{
    MaterializeStats, Materialized, RelationMap, RelationQuery, materialize, resolve_pointers,
};
use crate::wordnet::{DataSource, LoadStats, SynsetIndex};

/// Parameters of one derive run
#[derive(Debug, Clone)]
pub struct DeriveConfig {
    pub query: RelationQuery,
    /// Minimum distinct targets a source needs to be reported
    pub min_targets: usize,
    /// Show at most this many sources
    pub limit: Option<usize>,
}

impl DeriveConfig {
    #[must_use]
    pub fn new(min_targets: usize) -> Self {
        Self {
            query: RelationQuery::derivational(),
            min_targets,
            limit: None,
        }
    }
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self::new(3)
    }
}

/// Result of a derive run
#[derive(Debug, Clone)]
pub struct DeriveResult {
    pub query: RelationQuery,
    pub min_targets: usize,
    pub limit: Option<usize>,
    /// Every materialized relation, before the minimum-target filter
    pub relations: RelationMap,
    /// Relations meeting `min_targets`
    pub filtered: RelationMap,
    pub load_stats: Vec<LoadStats>,
    pub materialize_stats: MaterializeStats,
}

impl DeriveResult {
    /// Filtered entries to display, honoring `limit`
    pub fn shown(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.filtered
            .iter()
            .take(self.limit.unwrap_or(usize::MAX))
    }
}

/// Resolve and materialize `query` against an already loaded index
#[must_use]
pub fn derive_from_index(index: &SynsetIndex, query: &RelationQuery) -> Materialized {
    let pairs = resolve_pointers(index, query);
    materialize(index, &pairs, query)
}

/// Unfiltered relation map for `query`
///
/// # Errors
/// Returns `MissingSource` naming the absent file(s) when either family's data
/// file is missing, or `Io` when one cannot be read.
pub fn derive_relations(source: &DataSource, query: &RelationQuery) -> Result<RelationMap> {
    let loaded = source.load_index(&query.families())?;
    Ok(derive_from_index(&loaded.index, query).relations)
}

/// Full derive run: load, resolve, materialize, filter
///
/// # Errors
/// Same as [`derive_relations`].
pub fn run_derive(source: &DataSource, config: &DeriveConfig) -> Result<DeriveResult> {
    let loaded = source.load_index(&config.query.families())?;
    let materialized = derive_from_index(&loaded.index, &config.query);
    let filtered = materialized.relations.with_min_targets(config.min_targets);

    Ok(DeriveResult {
        query: config.query.clone(),
        min_targets: config.min_targets,
        limit: config.limit,
        relations: materialized.relations,
        filtered,
        load_stats: loaded.stats,
        materialize_stats: materialized.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PartOfSpeech;
    use crate::error::WordNetError;
    use std::fs;
    use tempfile::TempDir;

    const VERBS: &str = "  1 This software and database is being provided to you, the LICENSEE
00001740 41 v 02 hybridize 0 hybridise 0 003 + 00002000 n 0000 + 00002000 n 0000 @ 00001800 v 0000 01 + 02 00 | cross
00001800 41 v 01 move 0 004 + 00003000 n 0101 + 00003100 n 0101 + 00003200 n 0101 + 00009999 n 0101 | change position
00001900 41 v 01 idle 0 000 | do nothing
00002100 41 v 01 Americanize 0 001 + 00003300 n 0000 | make American
";

    const NOUNS: &str = "\
00002000 22 n 02 hybridization 0 hybridisation 0 000 | the act of mixing
00003000 04 n 01 motion 0 000 | a change of position
00003100 04 n 01 movement 0 000 | the act of changing location
00003200 04 n 02 mover 0 moving_company 0 000 | a firm that moves
00003300 04 n 01 Americanization 0 000 | assimilation
00004000 04 n 02 orphan 0 waif 0 000 | never referenced
";

    fn fixture() -> (TempDir, DataSource) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.verb"), VERBS).unwrap();
        fs::write(dir.path().join("data.noun"), NOUNS).unwrap();
        let source = DataSource::from_dir(dir.path());
        (dir, source)
    }

    #[test]
    fn hybridize_links_to_american_spelling() {
        let (_dir, source) = fixture();
        let relations = derive_relations(&source, &RelationQuery::derivational()).unwrap();

        assert_eq!(
            relations.get("hybridize").unwrap(),
            ["hybridization".to_string()].as_slice()
        );
    }

    #[test]
    fn verbs_without_qualifying_pointers_are_absent() {
        let (_dir, source) = fixture();
        let relations = derive_relations(&source, &RelationQuery::derivational()).unwrap();

        assert!(!relations.contains("idle"));
        assert!(!relations.contains("Americanize"));
        assert!(relations.sources().all(|s| s != "orphan"));
    }

    #[test]
    fn unresolved_target_does_not_fail_the_run() {
        let (_dir, source) = fixture();
        let result = run_derive(&source, &DeriveConfig::new(1)).unwrap();

        assert_eq!(
            result.relations.get("move").unwrap(),
            ["motion", "movement", "mover"].map(String::from).as_slice()
        );
        assert_eq!(result.materialize_stats.unresolved_target, 1);
    }

    #[test]
    fn min_targets_filters_only_the_filtered_view() {
        let (_dir, source) = fixture();
        let result = run_derive(&source, &DeriveConfig::new(3)).unwrap();

        assert!(result.filtered.contains("move"));
        assert!(!result.filtered.contains("hybridize"));
        assert!(result.relations.contains("hybridize"));
    }

    #[test]
    fn limit_caps_shown_entries() {
        let (_dir, source) = fixture();
        let mut config = DeriveConfig::new(1);
        config.limit = Some(1);
        let result = run_derive(&source, &config).unwrap();

        let shown: Vec<&str> = result.shown().map(|(verb, _)| verb).collect();
        assert_eq!(shown, vec!["hybridize"]);
    }

    #[test]
    fn missing_files_are_fatal_and_named() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("data.verb"), VERBS).unwrap();
        let source = DataSource::from_dir(dir.path());

        match derive_relations(&source, &RelationQuery::derivational()) {
            Err(WordNetError::MissingSource { paths }) => {
                assert_eq!(paths, vec![source.noun_path.clone()]);
            }
            other => panic!("expected MissingSource, got {other:?}"),
        }
    }

    #[test]
    fn load_stats_cover_both_families() {
        let (_dir, source) = fixture();
        let result = run_derive(&source, &DeriveConfig::default()).unwrap();

        let families: Vec<PartOfSpeech> = result.load_stats.iter().map(|s| s.pos).collect();
        assert_eq!(families, vec![PartOfSpeech::Verb, PartOfSpeech::Noun]);
        assert_eq!(result.load_stats[0].records, 4);
        assert_eq!(result.load_stats[0].not_data, 1);
    }
}
