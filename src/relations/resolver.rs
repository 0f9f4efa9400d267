//! Pointer resolution
//!
//! Filters the pointer edges of a source family down to the `(source, target)`
//! offset pairs of one relation. Targets are not checked against the index
//! here; unresolved targets are dropped later by the materializer.

use crate::core::{Offset, PartOfSpeech, SynsetRecord};
use crate::wordnet::SynsetIndex;
use rustc_hash::FxHashSet;

/// Pointer symbol for "derivationally related form"
pub const DERIVATIONALLY_RELATED: &str = "+";

/// Which edges to follow: symbol plus source and target families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationQuery {
    pub source_pos: PartOfSpeech,
    pub symbol: String,
    pub target_pos: PartOfSpeech,
}

impl RelationQuery {
    #[must_use]
    pub fn new(
        source_pos: PartOfSpeech,
        symbol: impl Into<String>,
        target_pos: PartOfSpeech,
    ) -> Self {
        Self {
            source_pos,
            symbol: symbol.into(),
            target_pos,
        }
    }

    /// Verb to noun derivational links
    #[must_use]
    pub fn derivational() -> Self {
        Self::new(PartOfSpeech::Verb, DERIVATIONALLY_RELATED, PartOfSpeech::Noun)
    }

    /// Both families this query reads from, source first
    #[must_use]
    pub fn families(&self) -> Vec<PartOfSpeech> {
        if self.source_pos == self.target_pos {
            vec![self.source_pos]
        } else {
            vec![self.source_pos, self.target_pos]
        }
    }
}

impl Default for RelationQuery {
    fn default() -> Self {
        Self::derivational()
    }
}

/// A source synset linked to a target synset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerPair {
    pub source: Offset,
    pub target: Offset,
}

/// Collect distinct matching pairs from `records`
///
/// Pairs come out in first-seen order: record order, then pointer-list order
/// within a record. Repeated edges are reported once.
#[must_use]
pub fn collect_pointer_pairs<'a>(
    records: impl IntoIterator<Item = &'a SynsetRecord>,
    symbol: &str,
    target_pos: PartOfSpeech,
) -> Vec<PointerPair> {
    let mut seen = FxHashSet::default();
    let mut pairs = Vec::new();

    for record in records {
        for edge in record.pointers_matching(symbol, target_pos) {
            let pair = PointerPair {
                source: record.offset,
                target: edge.target_offset,
            };
            if seen.insert(pair) {
                pairs.push(pair);
            }
        }
    }

    pairs
}

/// Resolve `query` over the source family of `index`, in ascending source offset
///
/// # Examples
/// ```
/// use wordnet_relations::core::PartOfSpeech;
/// use wordnet_relations::relations::{RelationQuery, resolve_pointers};
/// use wordnet_relations::wordnet::{SynsetIndex, decode_line};
///
/// let line = "00001740 41 v 01 hybridize 0 002 + 00002000 n 0101 + 00002000 n 0101 |";
/// let record = decode_line(line, PartOfSpeech::Verb).into_record().unwrap();
/// let index = SynsetIndex::from_records([record]);
///
/// let pairs = resolve_pointers(&index, &RelationQuery::derivational());
/// assert_eq!(pairs.len(), 1);
/// assert_eq!((pairs[0].source, pairs[0].target), (1740, 2000));
/// ```
#[must_use]
pub fn resolve_pointers(index: &SynsetIndex, query: &RelationQuery) -> Vec<PointerPair> {
    collect_pointer_pairs(
        index.records(query.source_pos),
        &query.symbol,
        query.target_pos,
    )
}
