//! WordNet data files
//!
//! Decoding of `data.<family>` lines, the per-family synset index and the
//! loader that ties files to both.

mod decoder;
mod index;
mod source;

pub use decoder::{DecodeOutcome, decode_line};
pub use index::SynsetIndex;
pub use source::{DataSource, FamilyLoad, LoadStats, LoadedIndex, decode_family};
