//! Relation materialization
//!
//! Joins resolved pointer pairs back through the index, picks a display lemma
//! for each side and groups the survivors by source lemma.

use super::resolver::{PointerPair, RelationQuery};
use super::selector::{WORD_SEPARATOR, select_representative};
use crate::core::{Offset, PartOfSpeech, SynsetKey};
use crate::wordnet::SynsetIndex;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

/// A presentable `(source, target)` lemma pair, separators already spaced
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RelationPair {
    pub source: String,
    pub target: String,
}

/// Where pairs were lost on the way to the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeStats {
    pub pairs_in: usize,
    pub unresolved_source: usize,
    pub unresolved_target: usize,
    pub empty_lemmas: usize,
    pub rejected_shape: usize,
    pub emitted: usize,
}

/// Lemma shape accepted for output: `[a-z][a-z_-]*`
///
/// Rejects numerals, capitalized (proper noun) forms and anything with other
/// punctuation.
///
/// # Examples
/// ```
/// use wordnet_relations::relations::is_lexical_token;
///
/// assert!(is_lexical_token("take_a_breath"));
/// assert!(is_lexical_token("cross-fertilize"));
/// assert!(!is_lexical_token("Americanize"));
/// assert!(!is_lexical_token("x2"));
/// assert!(!is_lexical_token("o'clock"));
/// ```
#[must_use]
pub fn is_lexical_token(lemma: &str) -> bool {
    let mut chars = lemma.chars();
    chars.next().is_some_and(|c| c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c == WORD_SEPARATOR || c == '-')
}

/// Replace word separators with single spaces
#[must_use]
pub fn display_form(lemma: &str) -> String {
    lemma.replace(WORD_SEPARATOR, " ")
}

enum Side {
    Lemma(String),
    Unresolved,
    Empty,
    Rejected,
}

/// Representative display lemma of the synset at `(pos, offset)`
fn representative(index: &SynsetIndex, pos: PartOfSpeech, offset: Offset) -> Side {
    let Some(record) = index.get(SynsetKey::new(pos, offset)) else {
        return Side::Unresolved;
    };
    match select_representative(&record.lemmas) {
        None => Side::Empty,
        Some(lemma) if is_lexical_token(lemma) => Side::Lemma(display_form(lemma)),
        Some(_) => Side::Rejected,
    }
}

/// Turn pointer pairs into lemma pairs, dropping anything that does not resolve
#[must_use]
pub fn materialize_pairs(
    index: &SynsetIndex,
    pairs: &[PointerPair],
    query: &RelationQuery,
) -> (Vec<RelationPair>, MaterializeStats) {
    let mut stats = MaterializeStats {
        pairs_in: pairs.len(),
        ..MaterializeStats::default()
    };
    let mut out = Vec::new();

    for pair in pairs {
        let source = representative(index, query.source_pos, pair.source);
        let target = representative(index, query.target_pos, pair.target);
        match (source, target) {
            (Side::Lemma(source), Side::Lemma(target)) => {
                out.push(RelationPair { source, target });
            }
            (Side::Unresolved, _) => stats.unresolved_source += 1,
            (_, Side::Unresolved) => stats.unresolved_target += 1,
            (Side::Empty, _) | (_, Side::Empty) => stats.empty_lemmas += 1,
            (Side::Rejected, _) | (_, Side::Rejected) => stats.rejected_shape += 1,
        }
    }
    stats.emitted = out.len();

    if stats.unresolved_source + stats.unresolved_target > 0 {
        debug!(
            unresolved_source = stats.unresolved_source,
            unresolved_target = stats.unresolved_target,
            "dropped pointer pairs with no matching synset"
        );
    }
    info!(
        pairs = stats.pairs_in,
        emitted = stats.emitted,
        rejected_shape = stats.rejected_shape,
        "materialized relations"
    );

    (out, stats)
}

/// Source lemma to its sorted, distinct target lemmas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl RelationMap {
    /// Group pairs by source lemma, deduplicating and sorting targets
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = RelationPair>) -> Self {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for pair in pairs {
            grouped.entry(pair.source).or_default().insert(pair.target);
        }
        Self {
            entries: grouped
                .into_iter()
                .map(|(source, targets)| (source, targets.into_iter().collect()))
                .collect(),
        }
    }

    /// Targets of one source lemma
    #[must_use]
    pub fn get(&self, source: &str) -> Option<&[String]> {
        self.entries.get(source).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, source: &str) -> bool {
        self.entries.contains_key(source)
    }

    /// Number of source lemmas
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of distinct `(source, target)` pairs
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Entries in ascending source order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(source, targets)| (source.as_str(), targets.as_slice()))
    }

    /// Source lemmas in ascending order
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Copy of the map keeping only sources with at least `min_targets` targets
    #[must_use]
    pub fn with_min_targets(&self, min_targets: usize) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(_, targets)| targets.len() >= min_targets)
                .map(|(source, targets)| (source.clone(), targets.clone()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RelationMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Output of a full materialization pass
#[derive(Debug, Clone)]
pub struct Materialized {
    pub relations: RelationMap,
    pub stats: MaterializeStats,
}

/// Materialize `pairs` and group them into a [`RelationMap`]
#[must_use]
pub fn materialize(
    index: &SynsetIndex,
    pairs: &[PointerPair],
    query: &RelationQuery,
) -> Materialized {
    let (pairs, stats) = materialize_pairs(index, pairs, query);
    Materialized {
        relations: RelationMap::from_pairs(pairs),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SynsetRecord;

    fn synset(pos: PartOfSpeech, offset: Offset, lemmas: &[&str]) -> SynsetRecord {
        SynsetRecord {
            offset,
            pos,
            lemmas: lemmas.iter().map(|s| (*s).to_string()).collect(),
            pointers: Vec::new(),
        }
    }

    fn pair(source: Offset, target: Offset) -> PointerPair {
        PointerPair { source, target }
    }

    fn relation(source: &str, target: &str) -> RelationPair {
        RelationPair {
            source: source.into(),
            target: target.into(),
        }
    }

    #[test]
    fn token_shape() {
        assert!(is_lexical_token("breathe"));
        assert!(is_lexical_token("look_up"));
        assert!(!is_lexical_token(""));
        assert!(!is_lexical_token("_under"));
        assert!(!is_lexical_token("Paris"));
        assert!(!is_lexical_token("b12"));
        assert!(!is_lexical_token("café"));
        assert!(!is_lexical_token("rock'n'roll"));
    }

    #[test]
    fn display_form_spaces_separators() {
        assert_eq!(display_form("take_a_breath"), "take a breath");
        assert_eq!(display_form("breathe"), "breathe");
    }

    #[test]
    fn resolves_both_sides() {
        let index = SynsetIndex::from_records([
            synset(PartOfSpeech::Verb, 1740, &["hybridize", "hybridise"]),
            synset(PartOfSpeech::Noun, 2000, &["hybridization", "hybridisation"]),
        ]);
        let (pairs, stats) =
            materialize_pairs(&index, &[pair(1740, 2000)], &RelationQuery::derivational());

        assert_eq!(pairs, vec![relation("hybridize", "hybridization")]);
        assert_eq!(stats.emitted, 1);
    }

    #[test]
    fn unresolved_target_is_dropped_silently() {
        let index = SynsetIndex::from_records([synset(PartOfSpeech::Verb, 1, &["run"])]);
        let (pairs, stats) =
            materialize_pairs(&index, &[pair(1, 999)], &RelationQuery::derivational());

        assert!(pairs.is_empty());
        assert_eq!(stats.unresolved_target, 1);
        assert_eq!(stats.unresolved_source, 0);
    }

    #[test]
    fn unresolved_source_is_counted() {
        let index = SynsetIndex::from_records([synset(PartOfSpeech::Noun, 2, &["run"])]);
        let (_, stats) = materialize_pairs(&index, &[pair(1, 2)], &RelationQuery::derivational());
        assert_eq!(stats.unresolved_source, 1);
    }

    #[test]
    fn target_lookup_uses_target_family() {
        // Offset 5 exists, but only as a verb
        let index = SynsetIndex::from_records([
            synset(PartOfSpeech::Verb, 1, &["run"]),
            synset(PartOfSpeech::Verb, 5, &["sprint"]),
        ]);
        let (pairs, _) = materialize_pairs(&index, &[pair(1, 5)], &RelationQuery::derivational());
        assert!(pairs.is_empty());
    }

    #[test]
    fn empty_lemma_list_is_skipped() {
        let index = SynsetIndex::from_records([
            synset(PartOfSpeech::Verb, 1, &[]),
            synset(PartOfSpeech::Noun, 2, &["run"]),
        ]);
        let (pairs, stats) =
            materialize_pairs(&index, &[pair(1, 2)], &RelationQuery::derivational());
        assert!(pairs.is_empty());
        assert_eq!(stats.empty_lemmas, 1);
    }

    #[test]
    fn shape_filter_applies_to_representative() {
        let index = SynsetIndex::from_records([
            synset(PartOfSpeech::Verb, 1, &["Americanize"]),
            synset(PartOfSpeech::Noun, 2, &["Americanization"]),
            synset(PartOfSpeech::Verb, 3, &["x-ray"]),
            synset(PartOfSpeech::Noun, 4, &["X-ray", "x-radiation"]),
            synset(PartOfSpeech::Verb, 5, &["look_up"]),
            synset(PartOfSpeech::Noun, 6, &["lookup"]),
        ]);
        let pairs_in = [pair(1, 2), pair(3, 4), pair(5, 6)];
        let (pairs, stats) = materialize_pairs(&index, &pairs_in, &RelationQuery::derivational());

        // "X-ray" is shorter than "x-radiation" and wins selection, then fails the shape
        assert_eq!(pairs, vec![relation("look up", "lookup")]);
        assert_eq!(stats.rejected_shape, 2);
    }

    #[test]
    fn relation_map_groups_and_sorts() {
        let map = RelationMap::from_pairs([
            relation("move", "motion"),
            relation("move", "movement"),
            relation("breathe", "breath"),
            relation("move", "motion"),
            relation("move", "mover"),
        ]);

        assert_eq!(map.len(), 2);
        assert_eq!(map.pair_count(), 4);
        assert_eq!(
            map.get("move").unwrap(),
            ["motion", "movement", "mover"].map(String::from).as_slice()
        );
        assert_eq!(map.sources().collect::<Vec<_>>(), vec!["breathe", "move"]);
    }

    #[test]
    fn min_targets_filter_leaves_unfiltered_map_intact() {
        let map = RelationMap::from_pairs([
            relation("breathe", "breath"),
            relation("breathe", "breather"),
            relation("move", "motion"),
            relation("move", "movement"),
            relation("move", "mover"),
        ]);

        let filtered = map.with_min_targets(3);
        assert!(filtered.contains("move"));
        assert!(!filtered.contains("breathe"));
        assert_eq!(map.get("breathe").map(<[String]>::len), Some(2));
    }

    #[test]
    fn materialize_builds_relation_map() {
        let index = SynsetIndex::from_records([
            synset(PartOfSpeech::Verb, 1, &["breathe", "take_a_breath"]),
            synset(PartOfSpeech::Verb, 7, &["respire"]),
            synset(PartOfSpeech::Noun, 2, &["breath"]),
            synset(PartOfSpeech::Noun, 3, &["breathing", "respiration"]),
            synset(PartOfSpeech::Noun, 4, &["orphan"]),
        ]);
        let pairs = [pair(1, 2), pair(1, 3), pair(7, 3)];
        let result = materialize(&index, &pairs, &RelationQuery::derivational());

        assert_eq!(result.relations.len(), 2);
        assert_eq!(
            result.relations.get("breathe").unwrap(),
            ["breath", "breathing"].map(String::from).as_slice()
        );
        // Synset 4 is never referenced and must not appear anywhere
        assert!(
            result
                .relations
                .iter()
                .all(|(source, targets)| source != "orphan"
                    && !targets.iter().any(|t| t == "orphan"))
        );
    }
}
