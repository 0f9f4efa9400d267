//! Lexical relations over the synset graph
//!
//! Pointer resolution, representative lemma selection and materialization of
//! lemma-level relations such as verb to noun derivations.

mod materializer;
mod resolver;
mod selector;

pub use materializer::{
    MaterializeStats, Materialized, RelationMap, RelationPair, display_form, is_lexical_token,
    materialize, materialize_pairs,
};
pub use resolver::{
    DERIVATIONALLY_RELATED, PointerPair, RelationQuery, collect_pointer_pairs, resolve_pointers,
};
pub use selector::{
    SelectionKey, WORD_SEPARATOR, is_american_spelling, is_british_spelling,
    select_representative,
};
