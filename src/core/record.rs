//! Decoded synset records
//!
//! A `SynsetRecord` is the structured form of one data-file line: its offset,
//! family, lemma list and typed pointer edges. Offsets are only unique within
//! a family, so `SynsetKey` pairs the two.

use super::PartOfSpeech;
use std::fmt;

/// Byte offset of a synset inside its family's data file
pub type Offset = u32;

/// The true identity of a synset: `(part_of_speech, offset)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SynsetKey {
    pub pos: PartOfSpeech,
    pub offset: Offset,
}

impl SynsetKey {
    #[inline]
    #[must_use]
    pub const fn new(pos: PartOfSpeech, offset: Offset) -> Self {
        Self { pos, offset }
    }
}

impl fmt::Display for SynsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.pos.tag())
    }
}

/// A typed edge from one synset to another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerEdge {
    /// Relation symbol, e.g. `+` (derivationally related form) or `@` (hypernym)
    pub symbol: String,
    pub target_offset: Offset,
    pub target_pos: PartOfSpeech,
}

impl PointerEdge {
    #[must_use]
    pub fn new(symbol: impl Into<String>, target_offset: Offset, target_pos: PartOfSpeech) -> Self {
        Self {
            symbol: symbol.into(),
            target_offset,
            target_pos,
        }
    }

    /// Key of the synset this edge points at
    #[inline]
    #[must_use]
    pub const fn target(&self) -> SynsetKey {
        SynsetKey::new(self.target_pos, self.target_offset)
    }

    /// Whether this edge carries `symbol` and lands in the `target_pos` family
    #[inline]
    #[must_use]
    pub fn matches(&self, symbol: &str, target_pos: PartOfSpeech) -> bool {
        self.symbol == symbol && self.target_pos == target_pos
    }
}

/// One decoded synset
///
/// Lemmas keep their raw form (underscores as word separators) in record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynsetRecord {
    pub offset: Offset,
    pub pos: PartOfSpeech,
    pub lemmas: Vec<String>,
    pub pointers: Vec<PointerEdge>,
}

impl SynsetRecord {
    #[inline]
    #[must_use]
    pub const fn key(&self) -> SynsetKey {
        SynsetKey::new(self.pos, self.offset)
    }

    /// Pointer edges matching a symbol and target family, in record order
    pub fn pointers_matching<'a>(
        &'a self,
        symbol: &'a str,
        target_pos: PartOfSpeech,
    ) -> impl Iterator<Item = &'a PointerEdge> + 'a {
        self.pointers
            .iter()
            .filter(move |edge| edge.matches(symbol, target_pos))
    }
}
