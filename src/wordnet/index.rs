//! Synset index
//!
//! Owns every decoded record for one run, keyed by `(part_of_speech, offset)`.
//! Lookups are hash-based; ordered iteration sorts by offset on demand.

use crate::core::{Offset, PartOfSpeech, SynsetKey, SynsetRecord};
use rustc_hash::FxHashMap;

/// Per-family mapping from offset to record
#[derive(Debug, Clone, Default)]
pub struct SynsetIndex {
    families: FxHashMap<PartOfSpeech, FxHashMap<Offset, SynsetRecord>>,
}

impl SynsetIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from already decoded records
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = SynsetRecord>) -> Self {
        let mut index = Self::new();
        index.extend(records);
        index
    }

    /// Insert a record, replacing (and returning) any previous record at its key
    pub fn insert(&mut self, record: SynsetRecord) -> Option<SynsetRecord> {
        self.families
            .entry(record.pos)
            .or_default()
            .insert(record.offset, record)
    }

    /// Look up a synset; an absent key is a normal `None`
    #[inline]
    #[must_use]
    pub fn lookup(&self, pos: PartOfSpeech, offset: Offset) -> Option<&SynsetRecord> {
        self.families.get(&pos)?.get(&offset)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: SynsetKey) -> Option<&SynsetRecord> {
        self.lookup(key.pos, key.offset)
    }

    /// Number of records in one family
    #[must_use]
    pub fn family_len(&self, pos: PartOfSpeech) -> usize {
        self.families.get(&pos).map_or(0, FxHashMap::len)
    }

    /// Total number of records across all families
    #[must_use]
    pub fn len(&self) -> usize {
        self.families.values().map(FxHashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Families that hold at least one record, in canonical order
    #[must_use]
    pub fn families(&self) -> Vec<PartOfSpeech> {
        PartOfSpeech::ALL
            .into_iter()
            .filter(|pos| self.family_len(*pos) > 0)
            .collect()
    }

    /// Records of one family in ascending offset order
    #[must_use]
    pub fn records(&self, pos: PartOfSpeech) -> Vec<&SynsetRecord> {
        let mut records: Vec<&SynsetRecord> = self
            .families
            .get(&pos)
            .map(|family| family.values().collect())
            .unwrap_or_default();
        records.sort_unstable_by_key(|record| record.offset);
        records
    }

}

impl Extend<SynsetRecord> for SynsetIndex {
    fn extend<I: IntoIterator<Item = SynsetRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pos: PartOfSpeech, offset: Offset, lemma: &str) -> SynsetRecord {
        SynsetRecord {
            offset,
            pos,
            lemmas: vec![lemma.to_string()],
            pointers: Vec::new(),
        }
    }

    #[test]
    fn lookup_by_family_and_offset() {
        let index = SynsetIndex::from_records([
            record(PartOfSpeech::Noun, 2000, "hybridization"),
            record(PartOfSpeech::Verb, 2000, "hybridize"),
        ]);

        assert_eq!(index.len(), 2);
        assert_eq!(
            index.lookup(PartOfSpeech::Noun, 2000).unwrap().lemmas,
            vec!["hybridization"]
        );
        assert_eq!(
            index.lookup(PartOfSpeech::Verb, 2000).unwrap().lemmas,
            vec!["hybridize"]
        );
    }

    #[test]
    fn absent_key_is_none() {
        let index = SynsetIndex::from_records([record(PartOfSpeech::Noun, 2000, "thing")]);
        assert!(index.lookup(PartOfSpeech::Noun, 2001).is_none());
        assert!(index.lookup(PartOfSpeech::Adverb, 2000).is_none());
        assert!(index.get(SynsetKey::new(PartOfSpeech::Verb, 2000)).is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut index = SynsetIndex::new();
        assert!(index.insert(record(PartOfSpeech::Noun, 10, "first")).is_none());
        let previous = index.insert(record(PartOfSpeech::Noun, 10, "second"));

        assert_eq!(previous.unwrap().lemmas, vec!["first"]);
        assert_eq!(index.family_len(PartOfSpeech::Noun), 1);
        assert_eq!(
            index.lookup(PartOfSpeech::Noun, 10).unwrap().lemmas,
            vec!["second"]
        );
    }

    #[test]
    fn records_iterate_in_offset_order() {
        let index = SynsetIndex::from_records([
            record(PartOfSpeech::Verb, 300, "c"),
            record(PartOfSpeech::Verb, 100, "a"),
            record(PartOfSpeech::Verb, 200, "b"),
            record(PartOfSpeech::Noun, 50, "n"),
        ]);

        let offsets: Vec<Offset> = index
            .records(PartOfSpeech::Verb)
            .iter()
            .map(|r| r.offset)
            .collect();
        assert_eq!(offsets, vec![100, 200, 300]);
        assert!(index.records(PartOfSpeech::Adverb).is_empty());
    }

    #[test]
    fn empty_index() {
        let index = SynsetIndex::new();
        assert!(index.is_empty());
        assert!(index.families().is_empty());
    }
}
