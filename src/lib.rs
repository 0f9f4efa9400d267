//! WordNet Relations
//!
//! Decodes WordNet lexicographer data files (`data.noun`, `data.verb`, ...) into
//! a synset index and follows typed pointers to build lemma-level relations,
//! such as verbs and their derivationally related nouns.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordnet_relations::commands::derive_relations;
//! use wordnet_relations::relations::RelationQuery;
//! use wordnet_relations::wordnet::DataSource;
//!
//! let source = DataSource::from_dir("data/raw/english-wordnet-2024_20250101/oewn2024");
//! let relations = derive_relations(&source, &RelationQuery::derivational()).unwrap();
//! for (verb, nouns) in relations.iter().filter(|(_, nouns)| nouns.len() >= 3) {
//!     println!("{verb} -> {}", nouns.join(", "));
//! }
//! ```

// Core domain types
pub mod core;

// Data file decoding and indexing
pub mod wordnet;

// Pointer resolution and relation building
pub mod relations;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;

pub use error::{Result, WordNetError};
