//! Core domain types for WordNet data
//!
//! Part-of-speech families, decoded synset records and the token cursor used
//! to read them. Nothing in here touches the filesystem.

mod cursor;
mod pos;
mod record;

pub use cursor::{MalformedReason, Radix, TokenCursor};
pub use pos::PartOfSpeech;
pub use record::{Offset, PointerEdge, SynsetKey, SynsetRecord};
